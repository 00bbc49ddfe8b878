//! Terminal renderer: styled flowing text, one user per block.

use colored::Colorize;

use crate::loader::{LoadError, ResolvedLoad};
use crate::models::User;
use crate::output::{PageData, PageRenderer};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl PageRenderer for TerminalRenderer {
    fn render(&self, page: &ResolvedLoad<PageData>) -> String {
        match &page.users {
            PageData::Users(users) => render_users(users),
            PageData::User(user) => render_user(user),
            PageData::Raw(body) => format!("{body}\n"),
            PageData::Status(code) => {
                let code_str = code.to_string();
                let styled = if (200..300).contains(code) {
                    code_str.green().bold()
                } else {
                    code_str.red().bold()
                };
                format!(" login responded with {styled}\n")
            }
        }
    }

    fn render_error(&self, err: &LoadError) -> String {
        format!(
            " {} {}\n   {}\n",
            "✖".red().bold(),
            "page failed to load".red().bold(),
            err
        )
    }
}

fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{}", "  No users.\n".dimmed());
    }

    let mut output = String::new();
    for user in users {
        output.push_str(&render_user(user));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
    output.push_str(&format!(
        " {} {}\n",
        users.len().to_string().bold(),
        if users.len() == 1 { "user" } else { "users" },
    ));
    output
}

fn render_user(user: &User) -> String {
    let badge = if user.is_pro {
        format!(" {}", "pro".cyan().bold())
    } else {
        String::new()
    };

    format!(
        " {} {}{}\n   age {} · {}\n",
        format!("#{}", user.id).dimmed(),
        user.full_name().bold(),
        badge,
        user.age,
        user.mobile,
    )
}
