use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn add(db: &str, name: &str, email: &str, phone: &str) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", db)
        .args(["add", "--name", name, "--email", email, "--phone", phone])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));
    Ok(())
}

#[test]
fn listing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("db").join("contacts.json");
    let db = db.to_string_lossy().to_string();

    Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", &db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialised contact book"));

    Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet"));

    add(&db, "Patricia", "lmartinez@bender-patterson.net", "08066809241")?;
    add(&db, "Diane", "grahammatthew@gmail.com", "08064879199")?;
    add(&db, "John", "wendy59@turner.com", "08046516806")?;

    let first = Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", &db)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", &db)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8_lossy(&first);
    let lines: Vec<_> = listing.lines().collect();

    // Header and separator, then one row per contact in insertion order
    assert_eq!(lines.len(), 5);
    assert!(lines[2].contains("Patricia"));
    assert!(lines[3].contains("Diane"));
    assert!(lines[4].contains("John"));

    assert_eq!(first, second);

    Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", &db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    Ok(())
}

#[test]
fn listing_missing_document_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin("contact-book")?
        .env("CONTACTS_DB_PATH", dir.path().join("contacts.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));

    Ok(())
}
