//! Menu commands and their role requirements
//!
//! Every typed choice parses into a finite command before anything runs;
//! each command states the minimum role it needs, so authorization is
//! decided by this table and not by the menu rendering.

use crate::models::account::Role;

/// Top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Books,
    Readers,
    Loans,
    Logout,
    Quit,
}

impl MainCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainCommand::Books),
            "2" => Some(MainCommand::Readers),
            "3" => Some(MainCommand::Loans),
            "4" => Some(MainCommand::Logout),
            "5" => Some(MainCommand::Quit),
            _ => None,
        }
    }
}

/// Books menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCommand {
    Register,
    List,
    Search,
    Back,
}

impl BookCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(BookCommand::Register),
            "2" => Some(BookCommand::List),
            "3" => Some(BookCommand::Search),
            "4" => Some(BookCommand::Back),
            _ => None,
        }
    }

    /// Minimum role, or `None` for unprivileged commands
    pub fn required_role(self) -> Option<Role> {
        match self {
            BookCommand::Register => Some(Role::Admin),
            BookCommand::List | BookCommand::Search | BookCommand::Back => None,
        }
    }
}

/// Readers menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderCommand {
    Register,
    List,
    Search,
    Back,
}

impl ReaderCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(ReaderCommand::Register),
            "2" => Some(ReaderCommand::List),
            "3" => Some(ReaderCommand::Search),
            "4" => Some(ReaderCommand::Back),
            _ => None,
        }
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            ReaderCommand::Register => Some(Role::Admin),
            ReaderCommand::List | ReaderCommand::Search | ReaderCommand::Back => None,
        }
    }
}

/// Loans menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanCommand {
    Register,
    Return,
    ListActive,
    Back,
}

impl LoanCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(LoanCommand::Register),
            "2" => Some(LoanCommand::Return),
            "3" => Some(LoanCommand::ListActive),
            "4" => Some(LoanCommand::Back),
            _ => None,
        }
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            LoanCommand::Register | LoanCommand::Return => Some(Role::Admin),
            LoanCommand::ListActive | LoanCommand::Back => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_commands_parse_from_choices() {
        assert_eq!(MainCommand::parse("1"), Some(MainCommand::Books));
        assert_eq!(MainCommand::parse(" 5 "), Some(MainCommand::Quit));
        assert_eq!(MainCommand::parse("0"), None);
        assert_eq!(MainCommand::parse("books"), None);
        assert_eq!(MainCommand::parse(""), None);
    }

    #[test]
    fn registrations_need_admin() {
        assert_eq!(BookCommand::Register.required_role(), Some(Role::Admin));
        assert_eq!(ReaderCommand::Register.required_role(), Some(Role::Admin));
        assert_eq!(LoanCommand::Register.required_role(), Some(Role::Admin));
        assert_eq!(LoanCommand::Return.required_role(), Some(Role::Admin));
    }

    #[test]
    fn listing_and_search_are_unprivileged() {
        assert_eq!(BookCommand::List.required_role(), None);
        assert_eq!(BookCommand::Search.required_role(), None);
        assert_eq!(ReaderCommand::List.required_role(), None);
        assert_eq!(LoanCommand::ListActive.required_role(), None);
    }
}
