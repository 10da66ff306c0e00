use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;
use std::path::PathBuf;

use crate::api::QaymClient;
use crate::cli::Command;
use crate::utils::Result;

/// Terminal-based explorer for the Qaym API
pub struct Client {
    /// API client for server communication
    api: QaymClient,
    /// Command line editor for user input
    editor: DefaultEditor,
    /// Path to command history file
    history_path: PathBuf,
}

impl Client {
    /// Create a new CLI client with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::home_dir().unwrap_or_default().join(".qaym_history");

        // Load history if it exists
        if editor.load_history(&history_path).is_err() {
            println!("{}", "No previous history.".yellow());
        }

        Ok(Self {
            api: QaymClient::new(api_key),
            editor,
            history_path,
        })
    }

    /// Create a new client with a custom server URL
    pub fn with_server_url(mut self, server_url: String) -> Self {
        self.api = self.api.with_base_url(server_url);
        self
    }

    /// Print available commands
    pub fn print_help(&self) {
        println!("\n{}", "Commands:".green().bold());
        println!("  {} - list all countries", "countries".cyan());
        println!("  {} - country info", "country <id>".cyan());
        println!("  {} - list all cities", "cities".cyan());
        println!("  {} - cities of a country", "cities <country_id>".cyan());
        println!("  {} - city info", "city <id>".cyan());
        println!("  {} - restaurants in a city", "items <city_id>".cyan());
        println!("  {} - top restaurants in a city", "top <city_id>".cyan());
        println!("  {} - restaurant info", "item <id>".cyan());
        println!("  {} - restaurant branches", "locations <item_id>".cyan());
        println!("  {} - restaurant reviews", "reviews <item_id>".cyan());
        println!("  {} - restaurant images", "images <item_id>".cyan());
        println!("  {} - restaurant votes", "votes <item_id>".cyan());
        println!("  {} - list all tags", "tags".cyan());
        println!("  {} - restaurants with a tag", "tag <id>".cyan());
        println!("  {} - swap the API key", "key <api_key>".cyan());
        println!("  {} - show last URL and response", "last".cyan());
        println!("  {} - help / clear / exit", "help".cyan());
        println!();
    }

    /// Process a command entered by the user; returns false to exit
    pub fn handle_command(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                return false;
            }
            Command::Help => self.print_help(),
            Command::Clear => print!("\x1B[2J\x1B[1;1H"),
            Command::Empty => (),
            Command::Last => self.show_last(),
            Command::SetKey(key) => {
                self.api.set_api_key(key);
                println!("{}", "API key updated.".green());
            }
            Command::Countries => Self::show(self.api.list_countries()),
            Command::Country(id) => Self::show(self.api.get_country(id)),
            Command::Cities => Self::show(self.api.list_cities()),
            Command::CountryCities(id) => Self::show(self.api.list_country_cities(id)),
            Command::City(id) => Self::show(self.api.get_city(id)),
            Command::CityItems(id) => Self::show(self.api.list_city_items(id)),
            Command::CityTopItems(id) => Self::show(self.api.list_city_top_items(id)),
            Command::Item(id) => Self::show(self.api.get_item(id)),
            Command::ItemLocations(id) => Self::show(self.api.list_item_locations(id)),
            Command::ItemReviews(id) => Self::show(self.api.list_item_reviews(id)),
            Command::ItemImages(id) => Self::show(self.api.list_item_images(id)),
            Command::ItemVotes(id) => Self::show(self.api.list_item_votes(id)),
            Command::Tags => Self::show(self.api.list_tags()),
            Command::TagItems(id) => Self::show(self.api.list_tag_items(id)),
            Command::Usage(usage) => println!("{} {}", "Usage:".red(), usage),
            Command::Unknown(cmd) => println!("{} {}", "Unknown command:".red(), cmd),
        }
        true
    }

    /// Pretty-print a call result or its error
    fn show(result: Result<Value>) {
        match result {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{text}"),
                Err(e) => println!("{} {}", "Failed to render response:".red(), e),
            },
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
    }

    /// Print the URL and decoded body of the most recent call
    fn show_last(&self) {
        match self.api.last_url() {
            Some(url) => println!("{} {}", "Last URL:".green(), url),
            None => println!("{}", "No calls made yet.".yellow()),
        }
        match self.api.last_response() {
            Some(value) => match serde_json::to_string_pretty(value) {
                Ok(text) => println!("{text}"),
                Err(e) => println!("{} {}", "Failed to render response:".red(), e),
            },
            None => println!("{}", "No response cached.".yellow()),
        }
    }

    /// Run the interactive prompt loop
    pub fn run(&mut self) -> Result<()> {
        println!("{}", "\nWelcome to the Qaym explorer!".green().bold());
        self.print_help();

        loop {
            let prompt = format!("{} ", ">>".cyan().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(line.as_str())?;
                    if !self.handle_command(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C".yellow());
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "CTRL-D".yellow());
                    break;
                }
                Err(err) => {
                    println!("{} {:?}", "Error:".red(), err);
                    break;
                }
            }
        }

        // Save history
        if let Err(e) = self.editor.save_history(&self.history_path) {
            println!("{} {}", "Failed to save history:".red(), e);
        }

        Ok(())
    }
}
