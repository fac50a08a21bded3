use clap::{Parser, Subcommand};

use kfa_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "dictool", about = "kfa pronunciation dictionary tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert ipadict.txt (word<TAB>ipa per line) to the JSON format
    Convert {
        /// Input text file
        input_txt: String,
        /// Output JSON file
        output_file: String,
    },
    /// Show dictionary statistics
    Info {
        /// Dictionary JSON file
        dict_file: String,
    },
    /// Look up every pronunciation of a word
    Lookup {
        /// Dictionary JSON file
        dict_file: String,
        /// English word
        word: String,
    },
    /// Download a JSON dictionary and check that it parses
    Fetch {
        /// Source URL
        url: String,
        /// Output JSON file
        output_file: String,
    },
    /// Export default phoneme tables as TOML
    PhonemesExport,
    /// Validate a custom phoneme TOML file
    PhonemesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            input_txt,
            output_file,
        } => dict_ops::convert(&input_txt, &output_file),
        Command::Info { dict_file } => dict_ops::info(&dict_file),
        Command::Lookup { dict_file, word } => dict_ops::lookup(&dict_file, &word),
        Command::Fetch { url, output_file } => dict_ops::fetch(&url, &output_file),
        Command::PhonemesExport => config_ops::phonemes_export(),
        Command::PhonemesValidate { file } => config_ops::phonemes_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
