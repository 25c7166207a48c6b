//! Console rendering of menus and company lists.

use carsharing_core::Company;
use std::io::{self, Write};

/// Prints the top-level menu.
pub fn print_main_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "1. Log in as a manager")?;
    writeln!(out, "0. Exit")
}

/// Prints the manager sub-menu.
pub fn print_manager_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "1. Company list")?;
    writeln!(out, "2. Create a company")?;
    writeln!(out, "0. Back")
}

/// Reports an out-of-range menu choice.
pub fn print_invalid_choice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Invalid choice. Please try again.")
}

/// Reports that no companies exist yet.
pub fn print_empty_company_list(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "The company list is empty!")
}

/// Renders companies with a 1-based index, in the order given.
pub fn print_company_list(out: &mut impl Write, companies: &[Company]) -> io::Result<()> {
    writeln!(out, "Company list:")?;
    for (index, company) in companies.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, company.name())?;
    }
    Ok(())
}

/// Reports whether a company was created.
pub fn print_create_result(out: &mut impl Write, created: bool) -> io::Result<()> {
    if created {
        writeln!(out, "The company was created!")
    } else {
        writeln!(out, "Failed to create the company.")
    }
}

#[cfg(test)]
mod tests {
    use super::print_company_list;
    use carsharing_core::Company;

    #[test]
    fn company_list_uses_position_not_id() {
        let companies = vec![Company::new(4, "Hertz"), Company::new(9, "Avis")];
        let mut out = Vec::new();

        print_company_list(&mut out, &companies).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Company list:\n1. Hertz\n2. Avis\n"
        );
    }
}
