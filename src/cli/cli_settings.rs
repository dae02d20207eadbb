use super::cli_main::{ask, get_user_input, prompt};
use super::cli_tables::settings_table;
use crate::settings::{SETTING_NAMES, Settings};

pub fn settings_menu() {
    let mut settings = Settings::new();
    loop {
        println!("\n=== Settings ===");
        settings_table(&settings).printstd();
        println!("\x1b[33m1-{}. Change a setting\x1b[0m", SETTING_NAMES.len());
        println!("\x1b[33mr. Reset to defaults\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        let choice = choice.trim();
        if choice == "0" {
            break;
        }
        if choice.eq_ignore_ascii_case("r") {
            match settings.reset_to_defaults() {
                Ok(()) => println!("Settings reset to defaults."),
                Err(e) => println!("Error: {}", e),
            }
            continue;
        }
        let name = match choice.parse::<usize>() {
            Ok(n) if (1..=SETTING_NAMES.len()).contains(&n) => SETTING_NAMES[n - 1],
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        let value = ask(&format!("New value for {}: ", name));
        match settings.set(name, &value) {
            Ok(()) => {
                println!("{} updated.", name);
                if name == SETTING_NAMES[0] || name == SETTING_NAMES[4] {
                    println!("The change takes effect on the next start.");
                }
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}
