//! XML fixture populator.
//!
//! Writes documents of the form:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <root>
//!   <row>
//!     <start_page>321</start_page>
//!     <user>5</user>
//!     <ts>2016-11-02 16:37:03.240</ts>
//!     <depth>22</depth>
//!     <duration>543</duration>
//!     <transmit>700000</transmit>
//!     <type>2</type>
//!   </row>
//! </root>
//! ```
//!
//! Output is compact by default; [`XMLPopulator::with_indent`] enables the
//! layout shown above.

pub mod args;
mod error;
mod populator;

pub use args::XMLPopulateArgs;
pub use error::XMLPopulatorError;
pub use populator::{XMLPopulator, ROOT_ELEMENT, ROW_ELEMENT};
