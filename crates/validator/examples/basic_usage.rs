//! Basic usage example for chainval

use chainval::prelude::*;
use futures::future::ok;
use tracing::Level;

#[derive(Debug)]
struct Signup {
    name: String,
    email: Option<String>,
    invited: bool,
}

/// Pretend lookup against a user store.
async fn name_taken(name: String) -> Result<bool, ValidationError> {
    Ok(name == "admin")
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let signup = Signup {
        name: "admin".to_string(),
        email: Some("admin@example.com".to_string()),
        invited: false,
    };

    // Immediate checks
    match validate(|v| {
        v.is_not_blank(&signup.name, || "name must not be blank")?
            .is_not_null(&signup.email, || "email is required")?;
        Ok(())
    }) {
        Ok(_) => println!("✓ {} passes the immediate checks", signup.name),
        Err(e) => println!("✗ {e}"),
    }

    // Deferred checks, evaluated in order when awaited
    let name = signup.name.clone();
    let result = validate_async(|v| {
        v.is_false(name_taken(name.clone()), move || format!("{name} is taken"));
        v.unless(signup.invited, |v| {
            v.is_true(ok(true), || "captcha rejected");
        });
    })
    .await;

    match result {
        Ok(()) => println!("✓ signup accepted"),
        Err(e) => println!("✗ signup rejected: {e}"),
    }
}
