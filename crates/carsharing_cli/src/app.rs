//! Interactive session state machine.
//!
//! # Invariants
//! - The session starts at `TopMenu`; `Terminated` is the only exit.
//! - Storage failures never end the session; only `0` at the top menu,
//!   end of input, or a console write error do.

use crate::input::InputReader;
use crate::menu;
use carsharing_core::{CompanyRepository, CompanyService};
use log::info;
use std::io::{self, BufRead, Write};

/// Which menu the session is showing, or that it has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    TopMenu,
    ManagerMenu,
    Terminated,
}

/// Interactive manager session over a company service and a console.
pub struct App<S: CompanyRepository, R: BufRead, W: Write> {
    service: CompanyService<S>,
    input: InputReader<R>,
    out: W,
}

impl<S: CompanyRepository, R: BufRead, W: Write> App<S, R, W> {
    /// Creates a session that reads choices from `input` and writes to `out`.
    pub fn new(service: CompanyService<S>, input: R, out: W) -> Self {
        Self {
            service,
            input: InputReader::new(input),
            out,
        }
    }

    /// Drives the session until it reaches `Terminated`.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = MenuState::TopMenu;
        while state != MenuState::Terminated {
            state = self.step(state)?;
        }
        self.out.flush()?;
        info!("event=session_end module=app status=ok");
        Ok(())
    }

    /// Shows the menu for `state`, reads one choice and returns the next state.
    pub fn step(&mut self, state: MenuState) -> io::Result<MenuState> {
        match state {
            MenuState::TopMenu => {
                menu::print_main_menu(&mut self.out)?;
                let next = match self.input.read_choice(&mut self.out)? {
                    None | Some(0) => MenuState::Terminated,
                    Some(1) => MenuState::ManagerMenu,
                    Some(_) => {
                        menu::print_invalid_choice(&mut self.out)?;
                        MenuState::TopMenu
                    }
                };
                Ok(next)
            }
            MenuState::ManagerMenu => {
                menu::print_manager_menu(&mut self.out)?;
                match self.input.read_choice(&mut self.out)? {
                    None => Ok(MenuState::Terminated),
                    Some(0) => Ok(MenuState::TopMenu),
                    Some(1) => {
                        self.show_company_list()?;
                        Ok(MenuState::ManagerMenu)
                    }
                    Some(2) => self.create_company(),
                    Some(_) => {
                        menu::print_invalid_choice(&mut self.out)?;
                        Ok(MenuState::ManagerMenu)
                    }
                }
            }
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    fn show_company_list(&mut self) -> io::Result<()> {
        let companies = self.service.list_companies();
        if companies.is_empty() {
            menu::print_empty_company_list(&mut self.out)
        } else {
            menu::print_company_list(&mut self.out, &companies)
        }
    }

    fn create_company(&mut self) -> io::Result<MenuState> {
        let Some(name) = self.input.read_name(&mut self.out)? else {
            return Ok(MenuState::Terminated);
        };
        let created = self.service.create_company(&name);
        menu::print_create_result(&mut self.out, created)?;
        Ok(MenuState::ManagerMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::{App, MenuState};
    use carsharing_core::db::open_db_in_memory;
    use carsharing_core::{CompanyService, SqliteCompanyRepository};
    use rusqlite::Connection;
    use std::io::Cursor;

    const TOP_MENU: &str = "1. Log in as a manager\n0. Exit\n";
    const MANAGER_MENU: &str = "1. Company list\n2. Create a company\n0. Back\n";
    const PROMPT: &str = "Enter your choice: ";

    fn run_session(conn: &Connection, input: &str) -> String {
        let mut out = Vec::new();
        let service = CompanyService::new(SqliteCompanyRepository::new(conn));
        App::new(service, Cursor::new(input.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn step_once(state: MenuState, input: &str) -> (MenuState, String) {
        let conn = open_db_in_memory().unwrap();
        let mut out = Vec::new();
        let service = CompanyService::new(SqliteCompanyRepository::new(&conn));
        let next = App::new(service, Cursor::new(input.to_string()), &mut out)
            .step(state)
            .unwrap();
        (next, String::from_utf8(out).unwrap())
    }

    #[test]
    fn login_back_exit_terminates() {
        let conn = open_db_in_memory().unwrap();

        let output = run_session(&conn, "1\n0\n0\n");

        let expected = format!("{TOP_MENU}{PROMPT}{MANAGER_MENU}{PROMPT}{TOP_MENU}{PROMPT}");
        assert_eq!(output, expected);
    }

    #[test]
    fn transitions_follow_menu_choices() {
        assert_eq!(step_once(MenuState::TopMenu, "1\n").0, MenuState::ManagerMenu);
        assert_eq!(step_once(MenuState::TopMenu, "0\n").0, MenuState::Terminated);
        assert_eq!(step_once(MenuState::ManagerMenu, "0\n").0, MenuState::TopMenu);
        assert_eq!(step_once(MenuState::ManagerMenu, "1\n").0, MenuState::ManagerMenu);
        assert_eq!(
            step_once(MenuState::Terminated, "").0,
            MenuState::Terminated
        );
    }

    #[test]
    fn out_of_range_choice_keeps_state_and_reports_it() {
        for state in [MenuState::TopMenu, MenuState::ManagerMenu] {
            let (next, output) = step_once(state, "99\n");
            assert_eq!(next, state);
            assert!(output.ends_with("Invalid choice. Please try again.\n"));
        }
    }

    #[test]
    fn empty_store_shows_empty_message() {
        let conn = open_db_in_memory().unwrap();

        let output = run_session(&conn, "1\n1\n0\n0\n");

        assert!(output.contains("The company list is empty!\n"));
        assert!(!output.contains("Company list:"));
    }

    #[test]
    fn created_companies_are_listed_in_order() {
        let conn = open_db_in_memory().unwrap();

        let output = run_session(&conn, "1\n2\nHertz\n2\nAvis\n1\n0\n0\n");

        assert_eq!(output.matches("The company was created!\n").count(), 2);
        assert!(output.contains("Company list:\n1. Hertz\n2. Avis\n"));
    }

    #[test]
    fn duplicate_company_reports_failure_and_lists_once() {
        let conn = open_db_in_memory().unwrap();

        let output = run_session(&conn, "1\n2\nHertz\n2\nHertz\n1\n0\n0\n");

        assert_eq!(output.matches("The company was created!\n").count(), 1);
        assert_eq!(output.matches("Failed to create the company.\n").count(), 1);
        assert!(output.contains("Company list:\n1. Hertz\n"));
        assert!(!output.contains("2. Hertz"));
    }

    #[test]
    fn non_numeric_choice_reprompts_without_leaving_menu() {
        let conn = open_db_in_memory().unwrap();

        let output = run_session(&conn, "manager\n1\n0\n0\n");

        assert!(output.contains("Invalid input. Please enter a number.\n"));
        assert!(output.contains(MANAGER_MENU));
    }

    #[test]
    fn end_of_input_terminates_from_any_prompt() {
        let conn = open_db_in_memory().unwrap();

        run_session(&conn, "");
        run_session(&conn, "1\n");
        let output = run_session(&conn, "1\n2\n");

        assert!(output.ends_with("Enter the company name: "));
    }

    #[test]
    fn non_utf8_name_is_stored_lossily_and_session_continues() {
        let conn = open_db_in_memory().unwrap();
        let mut input = b"1\n2\n".to_vec();
        input.extend_from_slice(&[0xc3, 0x28, b'\n']);
        input.extend_from_slice(b"1\n0\n0\n");
        let mut out = Vec::new();
        let service = CompanyService::new(SqliteCompanyRepository::new(&conn));

        App::new(service, Cursor::new(input), &mut out).run().unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("The company was created!\n"));
        assert!(output.contains("Company list:\n1. \u{FFFD}(\n"));
    }

    #[test]
    fn storage_failure_keeps_session_alive() {
        let conn = Connection::open_in_memory().unwrap();

        let output = run_session(&conn, "1\n2\nHertz\n1\n0\n0\n");

        assert!(output.contains("Failed to create the company.\n"));
        assert!(output.contains("The company list is empty!\n"));
    }
}
