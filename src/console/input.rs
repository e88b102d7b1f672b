//! Validated prompt helpers
//!
//! Every reader loops until the input satisfies its contract, so the core
//! only ever receives non-blank trimmed strings, ints within range,
//! strictly positive amounts, and dates that are not in the past. The core
//! re-validates its own invariants regardless.

use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::models::Money;

fn read_line(prompt: &str) -> String {
    print!("{}: ", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// A non-blank trimmed string
pub fn read_string(prompt: &str) -> String {
    loop {
        let value = read_line(prompt);
        if !value.is_empty() {
            return value;
        }
        println!("Input cannot be empty.");
    }
}

/// An integer within an inclusive range
pub fn read_int_in_range(prompt: &str, min: i64, max: i64) -> i64 {
    loop {
        let value = read_line(&format!("{} ({}-{})", prompt, min, max));
        match value.parse::<i64>() {
            Ok(n) if (min..=max).contains(&n) => return n,
            Ok(_) => println!("Please enter a value between {} and {}.", min, max),
            Err(_) => println!("Invalid input! Please enter an integer."),
        }
    }
}

/// A strictly positive amount
pub fn read_positive_amount(prompt: &str) -> Money {
    loop {
        let value = read_line(&format!("{} (TL)", prompt));
        match Money::parse(&value) {
            Ok(amount) if amount.is_positive() => return amount,
            Ok(_) => println!("Please enter a positive amount."),
            Err(_) => println!("Invalid input! Please enter a valid amount."),
        }
    }
}

/// An amount that may be zero (e.g. a free attraction)
pub fn read_amount(prompt: &str) -> Money {
    loop {
        let value = read_line(&format!("{} (TL)", prompt));
        match Money::parse(&value) {
            Ok(amount) if !amount.is_negative() => return amount,
            Ok(_) => println!("Please enter a non-negative amount."),
            Err(_) => println!("Invalid input! Please enter a valid amount."),
        }
    }
}

/// A DD.MM.YYYY date
pub fn read_date(prompt: &str) -> NaiveDate {
    loop {
        let value = read_line(&format!("{} (DD.MM.YYYY)", prompt));
        match NaiveDate::parse_from_str(&value, "%d.%m.%Y") {
            Ok(date) => return date,
            Err(_) => println!("Invalid date format! Example: 25.12.2026"),
        }
    }
}

/// A date that is not in the past
pub fn read_future_date(prompt: &str) -> NaiveDate {
    loop {
        let date = read_date(prompt);
        if date >= Local::now().date_naive() {
            return date;
        }
        println!("You cannot select a past date!");
    }
}

/// A yes/no answer
pub fn read_yes_no(prompt: &str) -> bool {
    loop {
        let value = read_line(&format!("{} (Y/N)", prompt)).to_uppercase();
        match value.as_str() {
            "Y" | "YES" => return true,
            "N" | "NO" => return false,
            _ => println!("Please enter Y (Yes) or N (No)."),
        }
    }
}
