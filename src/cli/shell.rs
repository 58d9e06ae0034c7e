//! Interactive menu around the parcel store
//!
//! Reads one answer per line. Store errors are reported and the menu
//! continues; end of input leaves the menu.

use std::io::BufRead;

use tracing::{debug, instrument};

use crate::application::ParcelStore;
use crate::cli::output;
use crate::cli::tree_view::TreeNodeConvert;
use crate::cli::{CliError, CliResult};
use crate::domain::{resolve_station, Carrier, InventoryEntry, ParcelRecord, STATIONS};

const MENU: [&str; 7] = [
    "1. Add parcel",
    "2. Find parcel by pickup code",
    "3. Find parcels by recipient",
    "4. Confirm pickup",
    "5. List all parcels",
    "6. Show hierarchy",
    "0. Exit",
];

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, R> {
    store: &'a mut ParcelStore,
    default_station: Option<String>,
    input: R,
}

impl<'a, R: BufRead> Shell<'a, R> {
    pub fn new(store: &'a mut ParcelStore, default_station: Option<String>, input: R) -> Self {
        Self {
            store,
            default_station,
            input,
        }
    }

    /// Run the menu until `0` or end of input.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            output::header("=== Campus Parcel Center ===");
            for line in MENU {
                output::info(line);
            }
            let Some(choice) = self.ask("Choose an option:")? else {
                break;
            };
            debug!("menu choice: {choice:?}");

            let flow = match choice.as_str() {
                "1" => self.add_parcel()?,
                "2" => self.find_by_code()?,
                "3" => self.find_by_recipient()?,
                "4" => self.confirm_pickup()?,
                "5" => self.list_all(),
                "6" => self.show_tree(),
                "0" => Flow::Exit,
                other => {
                    output::error(&format!("unknown option: {other}"));
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        output::info("Goodbye.");
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        output::prompt(prompt);
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CliError::io("read input", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Empty input selects the configured default station.
    fn pick_station(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return self.default_station.clone();
        }
        resolve_station(input).map(str::to_string)
    }

    fn station_prompt(&self) -> String {
        let choices: Vec<_> = STATIONS
            .iter()
            .enumerate()
            .map(|(idx, name)| format!("{}={}", idx + 1, name))
            .collect();
        match &self.default_station {
            Some(default) => format!("Station [{}] (default {default}):", choices.join(", ")),
            None => format!("Station [{}]:", choices.join(", ")),
        }
    }

    /// Ask for a station. `Ok(None)` at end of input, `Ok(Some(None))` for an invalid choice.
    fn ask_station(&mut self) -> CliResult<Option<Option<String>>> {
        let prompt = self.station_prompt();
        let Some(input) = self.ask(&prompt)? else {
            return Ok(None);
        };
        let station = self.pick_station(&input);
        if station.is_none() {
            output::error(&format!("invalid station: {input:?}"));
        }
        Ok(Some(station))
    }

    fn add_parcel(&mut self) -> CliResult<Flow> {
        let Some(station) = self.ask_station()? else {
            return Ok(Flow::Exit);
        };
        let Some(station) = station else {
            return Ok(Flow::Continue);
        };

        let carriers: Vec<_> = Carrier::all()
            .map(|c| format!("{}={}", c.code(), c.display_name()))
            .collect();
        let Some(carrier) = self.ask(&format!("Carrier code [{}]:", carriers.join(", ")))? else {
            return Ok(Flow::Exit);
        };
        let Some(record_id) = self.ask("Parcel id:")? else {
            return Ok(Flow::Exit);
        };
        if record_id.is_empty() {
            output::error("parcel id must not be empty");
            return Ok(Flow::Continue);
        }
        let Some(recipient) = self.ask("Recipient:")? else {
            return Ok(Flow::Exit);
        };

        match self.store.insert(&station, &carrier, &record_id, &recipient) {
            Ok(record) => {
                output::success("Parcel stored");
                print_record(&station, &record);
            }
            Err(e) => output::error(&e),
        }
        Ok(Flow::Continue)
    }

    fn find_by_code(&mut self) -> CliResult<Flow> {
        let Some(station) = self.ask_station()? else {
            return Ok(Flow::Exit);
        };
        let Some(station) = station else {
            return Ok(Flow::Continue);
        };
        let Some(code) = self.ask("Pickup code:")? else {
            return Ok(Flow::Exit);
        };

        match self.store.find_by_code(&station, &code) {
            Ok(Some(record)) => print_record(&station, record),
            Ok(None) => output::failure(&format!("no parcel with pickup code {code} at {station}")),
            Err(e) => output::error(&e),
        }
        Ok(Flow::Continue)
    }

    fn find_by_recipient(&mut self) -> CliResult<Flow> {
        let Some(station) = self.ask_station()? else {
            return Ok(Flow::Exit);
        };
        let Some(station) = station else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.ask("Recipient (partial match):")? else {
            return Ok(Flow::Exit);
        };

        match self.store.find_by_recipient(&station, &name) {
            Ok(records) if records.is_empty() => {
                output::failure(&format!("no parcel for recipient {name:?} at {station}"))
            }
            Ok(records) => {
                output::success(&format!("{} parcel(s) found", records.len()));
                for record in records {
                    print_record(&station, record);
                }
            }
            Err(e) => output::error(&e),
        }
        Ok(Flow::Continue)
    }

    fn confirm_pickup(&mut self) -> CliResult<Flow> {
        let Some(station) = self.ask_station()? else {
            return Ok(Flow::Exit);
        };
        let Some(station) = station else {
            return Ok(Flow::Continue);
        };
        let Some(code) = self.ask("Pickup code:")? else {
            return Ok(Flow::Exit);
        };

        match self.store.confirm_pickup(&station, &code) {
            Ok(record) => output::success(&format!("Parcel {} picked up", record.id())),
            Err(e) => output::error(&e),
        }
        Ok(Flow::Continue)
    }

    fn list_all(&self) -> Flow {
        let inventory = self.store.enumerate();
        for entry in inventory.entries() {
            match entry {
                InventoryEntry::Root { .. } => output::header(entry),
                _ => output::info(entry),
            }
        }
        if inventory.is_empty() {
            output::detail("no records");
        }
        Flow::Continue
    }

    fn show_tree(&self) -> Flow {
        output::info(&self.store.root().to_tree_string());
        Flow::Continue
    }
}

fn print_record(station: &str, record: &ParcelRecord) {
    output::field("Station", station);
    output::field("Carrier", &record.carrier());
    output::field("Parcel id", record.id());
    output::field("Recipient", record.recipient());
    output::field("Pickup code", record.pickup_code());
    output::field("Status", record.status_label());
}
