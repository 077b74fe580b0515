//! Credstore - Entry Point
//!
//! Interactive menu over the file-backed credential store.

use log::{error, warn};
use std::io::{self, BufRead, Write};

use credstore::{CredentialStore, StoreConfig};

fn display_menu() {
    println!("\n================================");
    println!("   USER AUTHENTICATION SYSTEM");
    println!("================================");
    println!("  1. Sign Up");
    println!("  2. Login");
    println!("  3. Forgot Password");
    println!("  4. Check Username");
    println!("  5. View Statistics");
    println!("  6. Exit");
    println!("================================");
}

/// Print a prompt and read one trimmed line from stdin.
/// Returns `None` at end of input.
fn prompt(stdin: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like `prompt`, but treats end of input as an empty answer.
fn prompt_or_empty(stdin: &mut impl BufRead, label: &str) -> io::Result<String> {
    Ok(prompt(stdin, label)?.unwrap_or_default())
}

fn sign_up(store: &mut CredentialStore, stdin: &mut impl BufRead) -> io::Result<()> {
    println!("\n--- SIGN UP ---");
    let username = prompt_or_empty(stdin, "Enter username: ")?;
    let password = prompt_or_empty(stdin, "Enter password: ")?;

    println!(
        "Password Strength: {}",
        store.check_password_strength(&password)
    );

    let question = prompt_or_empty(stdin, "Enter security question: ")?;
    let answer = prompt_or_empty(stdin, "Enter security answer: ")?;

    if store.sign_up(&username, &password, &question, &answer) {
        println!("\nSign up successful! You can now login.");
    } else {
        println!("\nSign up failed! Username already exists.");
    }
    Ok(())
}

fn login(store: &CredentialStore, stdin: &mut impl BufRead) -> io::Result<()> {
    println!("\n--- LOGIN ---");
    let username = prompt_or_empty(stdin, "Enter username: ")?;
    let password = prompt_or_empty(stdin, "Enter password: ")?;

    if store.login(&username, &password) {
        println!("\nLogin successful! Welcome, {}!", username);
    } else {
        println!("\nLogin failed! Invalid username or password.");
    }
    Ok(())
}

fn forgot_password(store: &mut CredentialStore, stdin: &mut impl BufRead) -> io::Result<()> {
    println!("\n--- FORGOT PASSWORD ---");
    let username = prompt_or_empty(stdin, "Enter username: ")?;

    let question = store.security_question(&username);
    if question.is_empty() {
        println!("\nUsername not found!");
        return Ok(());
    }

    println!("\nSecurity Question: {}", question);
    let answer = prompt_or_empty(stdin, "Enter your answer: ")?;
    let new_password = prompt_or_empty(stdin, "Enter new password: ")?;

    if store.reset_password(&username, &answer, &new_password) {
        println!("\nPassword reset successful! You can now login.");
    } else {
        println!("\nPassword reset failed! Incorrect answer.");
    }
    Ok(())
}

fn check_username(store: &CredentialStore, stdin: &mut impl BufRead) -> io::Result<()> {
    println!("\n--- CHECK USERNAME ---");
    let username = prompt_or_empty(stdin, "Enter username: ")?;

    if store.username_exists(&username) {
        println!("\nUsername '{}' is taken.", username);
    } else {
        println!("\nUsername '{}' is available.", username);
    }
    Ok(())
}

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = StoreConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        StoreConfig::default()
    });

    let mut store = match CredentialStore::open(&config) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open credential store at {}: {}", config.db_path, e);
            std::process::exit(1);
        }
    };

    println!("\nWelcome to the Authentication System\n");

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        display_menu();
        let choice = match prompt(&mut stdin, "Enter your choice: ") {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        let result = match choice.as_str() {
            "1" => sign_up(&mut store, &mut stdin),
            "2" => login(&store, &mut stdin),
            "3" => forgot_password(&mut store, &mut stdin),
            "4" => check_username(&store, &mut stdin),
            "5" => {
                println!("\nTotal registered users: {}", store.total_users());
                Ok(())
            }
            "6" => {
                println!("\nGoodbye!");
                break;
            }
            other => {
                println!("\nInvalid choice: {}", other);
                Ok(())
            }
        };

        if let Err(e) = result {
            error!("Failed to read input: {}", e);
            break;
        }
    }
}
