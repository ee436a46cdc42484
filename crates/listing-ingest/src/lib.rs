pub mod error;
pub mod reader;
pub mod tables;

pub use error::{IngestError, Result};
pub use reader::{RawRecord, read_records};
pub use tables::{
    ReferenceData, TableLayout, load_direct_cards, load_expansions, load_grouped_cards,
    load_hints, load_reference_data, load_surgeons,
};
