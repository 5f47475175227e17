//! Subcommand implementations.
//!
//! Each command loads a playlist from disk, then reports on it or writes it
//! back out. Rendering is kept separate from printing so it can be tested.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info, warn};

use xspf::{AttributionFilter, Playlist};

use crate::{Command, Config};

/// Errors raised by the command layer itself.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The requested output format is not one we can write
    #[error("Unknown output format '{0}'. Valid formats: xspf, m3u, smil")]
    UnknownFormat(String),

    /// Re-serializing the parsed playlist gave a different document
    #[error("Playlist does not survive a parse/serialize round trip")]
    NotIdempotent,
}

/// Formats a playlist can be converted to.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xspf,
    M3u,
    Smil,
}

impl FromStr for OutputFormat {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xspf" => Ok(OutputFormat::Xspf),
            "m3u" => Ok(OutputFormat::M3u),
            "smil" => Ok(OutputFormat::Smil),
            other => Err(CommandError::UnknownFormat(other.to_string())),
        }
    }
}

/// Run the configured command.
pub fn run(config: &Config) -> Result<()> {
    match &config.command {
        Command::Inspect { file, json } => {
            let playlist = load(file)?;
            if *json {
                let dump = serde_json::to_string_pretty(&playlist)
                    .context("Failed to encode playlist as JSON")?;
                println!("{}", dump);
            } else {
                print!("{}", summarize(&playlist));
            }
            Ok(())
        }
        Command::Validate { file } => {
            let playlist = load(file)?;
            if config.strict {
                check_round_trip(&playlist)
                    .with_context(|| format!("'{}' failed strict validation", file.display()))?;
            }
            println!("{}: valid", file.display());
            Ok(())
        }
        Command::Convert { file, to, output } => {
            let playlist = load(file)?;
            let format = to.unwrap_or(OutputFormat::Xspf);
            convert(&playlist, format, output)?;
            info!(
                "Wrote {} as {:?} to {}",
                file.display(),
                format,
                output.display()
            );
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<Playlist> {
    debug!("Loading playlist from {}", path.display());
    Playlist::from_file(path)
        .with_context(|| format!("Failed to read playlist from '{}'", path.display()))
}

/// Serialize, reparse and serialize again, requiring identical output.
pub fn check_round_trip(playlist: &Playlist) -> Result<()> {
    let first = playlist.to_xml();
    let reparsed = Playlist::parse(&first).context("Serialized playlist does not parse")?;
    let second = reparsed.to_xml();

    if first != second {
        warn!("Round trip changed the document");
        return Err(CommandError::NotIdempotent.into());
    }
    Ok(())
}

/// Write `playlist` to `output` in `format`.
pub fn convert(playlist: &Playlist, format: OutputFormat, output: &Path) -> Result<()> {
    let result = match format {
        OutputFormat::Xspf => playlist.to_file(output),
        OutputFormat::M3u => playlist.to_m3u(output),
        OutputFormat::Smil => playlist.to_smil(output),
    };
    result.with_context(|| format!("Failed to write '{}'", output.display()))
}

/// Human-readable overview of a playlist.
pub fn summarize(playlist: &Playlist) -> String {
    Summary(playlist).to_string()
}

struct Summary<'a>(&'a Playlist);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let playlist = self.0;
        writeln!(f, "Title:        {}", playlist.title().unwrap_or("(untitled)"))?;
        if let Some(creator) = playlist.creator() {
            writeln!(f, "Creator:      {}", creator)?;
        }
        if let Some(date) = playlist.date() {
            writeln!(f, "Date:         {}", date)?;
        }
        if let Some(license) = playlist.license() {
            writeln!(f, "License:      {}", license)?;
        }

        let seconds = playlist.duration();
        writeln!(
            f,
            "Tracks:       {} ({}:{:02})",
            playlist.tracks().len(),
            seconds / 60,
            seconds % 60
        )?;

        let attributions = playlist.attributions();
        if !attributions.is_empty() {
            writeln!(
                f,
                "Attributions: {} ({} locations, {} identifiers)",
                attributions.len(),
                playlist.attributions_filtered(AttributionFilter::LOCATION).len(),
                playlist.attributions_filtered(AttributionFilter::IDENTIFIER).len()
            )?;
        }
        if !playlist.extensions().is_empty() {
            writeln!(f, "Extensions:   {}", playlist.extensions().len())?;
        }

        for (index, track) in playlist.tracks().iter().enumerate() {
            let name = track
                .title()
                .or_else(|| track.locations().first().map(|location| location.as_str()))
                .unwrap_or("(no title)");
            write!(f, "{:>3}. ", index + 1)?;
            if let Some(creator) = track.creator() {
                write!(f, "{} - ", creator)?;
            }
            write!(f, "{}", name)?;
            if let Some(millis) = track.duration() {
                write!(f, " [{}s]", millis / 1000)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
