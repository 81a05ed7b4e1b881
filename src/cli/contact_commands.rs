use crate::cli::context::CLIContext;
use crate::error::AddressBookError;
use crate::flat_file;
use crate::ops::*;
use crate::queries::*;
use crate::validation;

pub fn list(ctx: &CLIContext) {
    let contacts = contact_queries::display_contacts_with(&ctx.dir, ctx.config.sort);
    if contacts.is_empty() {
        println!("No contacts yet. Use 'add' to add someone.");
        return;
    }

    println!("Contacts ({}):", contacts.len());
    for contact in contacts {
        println!("  {}", contact);
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name: ") {
            Some(s) => s,
            None => return,
        }
    };
    let email = match ctx.prompt("Email: ") {
        Some(s) => s,
        None => return,
    };
    let phones = match ctx.prompt("Phone numbers (comma separated): ") {
        Some(s) => validation::phones_from_csv(&s),
        None => return,
    };

    let contact = contact_ops::add_contact(&mut ctx.dir, &name, &email, phones);
    println!("Added {}", contact.name);
}

pub fn search(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: search <name or email>");
        return;
    }

    match contact_queries::search_contacts(&ctx.dir, args) {
        Ok(results) => {
            println!("Found {} result(s) for '{}':", results.len(), args);
            for contact in results {
                println!("  {}", contact);
            }
        }
        Err(AddressBookError::NotFound { .. }) => println!("No contacts found for '{}'", args),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: edit <name>");
        return;
    }
    if ctx.dir.find_first_by_name(args).is_none() {
        println!("No contact named '{}'", args);
        return;
    }

    let email = match ctx.prompt("New email: ") {
        Some(s) => s,
        None => return,
    };
    let phones = match ctx.prompt("New phone numbers (comma separated): ") {
        Some(s) => s,
        None => return,
    };

    match contact_ops::edit_contact(&mut ctx.dir, args, &email, &phones) {
        Ok(contact) => println!("Updated {}", contact),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: delete <name>");
        return;
    }

    match contact_ops::delete_contact(&mut ctx.dir, args) {
        Ok(contact) => println!("Deleted {}", contact.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn merge(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: merge <name>");
        return;
    }

    match contact_ops::merge_contacts(&mut ctx.dir, args) {
        Ok(contact) => println!("Merged into {}", contact),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn duplicates(ctx: &CLIContext) {
    let names = contact_queries::duplicate_names(&ctx.dir);
    if names.is_empty() {
        println!("No duplicate names.");
        return;
    }

    println!("Names with duplicates (use 'merge <name>'):");
    for name in names {
        println!("  {}", name);
    }
}

pub fn export(ctx: &CLIContext, args: &str) {
    let path = ctx.file_arg(args);
    match flat_file::export_contacts(&ctx.dir, &path) {
        Ok(count) => println!("Exported {} contact(s) to {}", count, path.display()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn import(ctx: &mut CLIContext, args: &str) {
    let path = ctx.file_arg(args);
    match flat_file::import_contacts(&mut ctx.dir, &path) {
        Ok(stats) => {
            println!("Imported {} contact(s) from {}", stats.imported, path.display());
            if !stats.skipped.is_empty() {
                println!("Skipped {} malformed line(s):", stats.skipped.len());
                for e in &stats.skipped {
                    println!("  {}", e);
                }
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}
