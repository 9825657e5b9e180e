//! Presentation layer: maps subcommands 1:1 onto store operations and
//! renders the results as plain text. No data transformation happens
//! here.

use clap::Subcommand;

use crate::db::models::Pin;
use crate::error::AppResult;
use crate::store::{AppStore, PinDraft, PinPatch};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List selectable users
    Users,
    /// Log in as a user by id
    Login { user_id: i64 },
    /// Log out
    Logout,
    /// Show the active user
    Whoami,
    /// List pins, newest first, optionally filtered
    List {
        /// Case-insensitive match against titles and tags
        #[arg(long)]
        search: Option<String>,
        /// Keep only pins carrying one of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List every tag in use
    Tags,
    /// Show a single pin with its author
    Show { pin_id: String },
    /// Show a user's profile with their authored and saved pins
    Profile { user_id: i64 },
    /// Create a pin (admin only)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image_url: String,
        /// Tags for the new pin (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Edit a pin (admin only); omitted fields keep their values
    Edit {
        pin_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        /// Replace the tag list (repeatable); omit to keep it
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a pin (admin only)
    Delete { pin_id: String },
    /// Like a pin
    Like { pin_id: String },
    /// Toggle whether the active user has saved a pin
    Save { pin_id: String },
    /// Reset search text and selected tags
    ClearFilters,
}

pub fn run(store: &mut AppStore, command: Command) -> AppResult<()> {
    match command {
        Command::Users => {
            for user in store.users() {
                println!("{:>4}  {}  <{}>  [{:?}]", user.id, user.name, user.email, user.role);
            }
        }
        Command::Login { user_id } => {
            let user = store.login(user_id)?;
            println!("Logged in as {} (id {})", user.name, user.id);
        }
        Command::Logout => {
            store.logout();
            println!("Logged out");
        }
        Command::Whoami => match store.current_user() {
            Some(user) => println!("{} (id {}, {:?})", user.name, user.id, user.role),
            None => println!("Not logged in"),
        },
        Command::List { search, tags } => {
            if let Some(text) = search {
                store.set_search_text(text);
            }
            for tag in &tags {
                store.toggle_tag_filter(tag);
            }
            for pin in store.visible_pins() {
                print_pin_line(pin);
            }
        }
        Command::Tags => {
            for tag in store.available_tags() {
                println!("{tag}");
            }
        }
        Command::Show { pin_id } => match store.pin(&pin_id) {
            Some(pin) => {
                let author = store
                    .user(pin.user_id)
                    .map(|u| u.name.as_str())
                    .unwrap_or("(unknown author)");
                println!("{}", pin.title);
                println!("  by {}", author);
                println!("  {}", pin.image_url);
                if !pin.description.is_empty() {
                    println!("  {}", pin.description);
                }
                println!("  tags: {}", pin.tags.join(", "));
                println!("  likes: {}  saved by: {}", pin.likes, pin.saved_by.len());
                println!("  created: {}", pin.created_at);
            }
            None => println!("Pin not found"),
        },
        Command::Profile { user_id } => match store.user(user_id) {
            Some(user) => {
                println!("{}  <{}>  [{:?}]", user.name, user.email, user.role);
                if !user.bio.is_empty() {
                    println!("  {}", user.bio);
                }
                println!("  followers: {}", user.followers);

                let authored = store.authored_pins(user_id);
                println!("Pins ({}):", authored.len());
                for pin in authored {
                    print_pin_line(pin);
                }

                let saved = store.saved_pins(user_id);
                println!("Saved ({}):", saved.len());
                for pin in saved {
                    print_pin_line(pin);
                }
            }
            None => println!("User not found"),
        },
        Command::Create {
            title,
            description,
            image_url,
            tags,
        } => {
            let pin = store.create_pin(PinDraft {
                title,
                description,
                image_url,
                tags,
            })?;
            println!("Created pin {}", pin.id);
        }
        Command::Edit {
            pin_id,
            title,
            description,
            image_url,
            tags,
        } => {
            let patch = PinPatch {
                title,
                description,
                image_url,
                tags: if tags.is_empty() { None } else { Some(tags) },
            };
            if store.edit_pin(&pin_id, patch)?.is_some() {
                println!("Updated pin {pin_id}");
            }
        }
        Command::Delete { pin_id } => {
            store.delete_pin(&pin_id)?;
            println!("Deleted pin {pin_id}");
        }
        Command::Like { pin_id } => {
            store.like_pin(&pin_id);
            println!("Liked pin {pin_id}");
        }
        Command::Save { pin_id } => {
            store.toggle_save(&pin_id)?;
            println!("Toggled save on pin {pin_id}");
        }
        Command::ClearFilters => {
            store.clear_filters();
            println!("Filters cleared");
        }
    }
    Ok(())
}

fn print_pin_line(pin: &Pin) {
    println!(
        "{}  {}  [{}]  {} likes",
        pin.id,
        pin.title,
        pin.tags.join(", "),
        pin.likes
    );
}
