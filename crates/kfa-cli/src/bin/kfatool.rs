use clap::{Parser, Subcommand};

use kfa_cli::commands::translate_ops;
use kfa_core::translate::Format;

#[derive(Parser)]
#[command(name = "kfatool", about = "English / IPA / kfa translation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert IPA to kfa
    IpaToKfa {
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert kfa to IPA
    KfaToIpa {
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Translate text into the other two representations
    Translate {
        /// Dictionary JSON file or URL
        #[arg(long)]
        dict: String,
        /// Input format: english, ipa or kfa
        #[arg(long, default_value = "english")]
        from: Format,
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every pronunciation of each English word
    Enhanced {
        /// Dictionary JSON file or URL
        #[arg(long)]
        dict: String,
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render kfa as eSpeak phoneme input
    Espeak {
        kfa: String,
        /// Voice, e.g. en/en-uk
        #[arg(long)]
        voice: Option<String>,
        /// Words per minute
        #[arg(long)]
        speed: Option<u32>,
        /// Output the full speech request as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the IPA → kfa symbol table
    Phonemes,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::IpaToKfa { text, json } => translate_ops::ipa_to_kfa_cmd(&text, json),
        Command::KfaToIpa { text, json } => translate_ops::kfa_to_ipa_cmd(&text, json),
        Command::Translate {
            dict,
            from,
            text,
            json,
        } => translate_ops::translate_cmd(&dict, from, &text, json),
        Command::Enhanced { dict, text, json } => translate_ops::enhanced_cmd(&dict, &text, json),
        Command::Espeak {
            kfa,
            voice,
            speed,
            json,
        } => translate_ops::espeak_cmd(&kfa, voice.as_deref(), speed, json),
        Command::Phonemes => translate_ops::phonemes_cmd(),
    }
}
