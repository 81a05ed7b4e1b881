pub mod context;
pub mod contact_commands;

use crate::config::Config;
use crate::store::ContactDirectory;
use context::CLIContext;

/// Run the interactive REPL over `dir` until the user exits or stdin closes.
pub fn run(dir: ContactDirectory, config: Config) {
    println!("Address Book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = CLIContext::new(dir, config);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" | "display" => contact_commands::list(ctx),
            "add" => contact_commands::add(ctx, args),
            "search" | "find" => contact_commands::search(ctx, args),
            "edit" => contact_commands::edit(ctx, args),
            "delete" | "rm" => contact_commands::delete(ctx, args),
            "merge" => contact_commands::merge(ctx, args),
            "duplicates" | "dupes" => contact_commands::duplicates(ctx),

            "export" => contact_commands::export(ctx, args),
            "import" => contact_commands::import(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Contacts:
    list                    List all contacts sorted by name
    add [name]              Add a contact (prompts for email and phones)
    search <query>          Find contacts by name or email
    edit <name>             Replace a contact's email and phone numbers
    delete <name>           Delete the first contact with this name
    merge <name>            Merge all contacts with this name into one
    duplicates              Show names that occur more than once

  Files:
    export [file]           Write contacts to a file
    import [file]           Read contacts from a file

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are matched case-insensitively
  - Without a file argument, export and import use the configured path"#);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_splits_on_first_space() {
        assert_eq!(parse_command("merge Jane Doe"), ("merge", "Jane Doe"));
    }

    #[test]
    fn parse_command_without_args() {
        assert_eq!(parse_command("  list  "), ("list", ""));
    }

    #[test]
    fn parse_command_accepts_tabs() {
        assert_eq!(parse_command("search\t john "), ("search", "john"));
    }
}
