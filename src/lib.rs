#![warn(clippy::allow_attributes)]
#![warn(clippy::assigning_clones)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::collection_is_never_read)]
#![warn(clippy::debug_assert_with_mut_call)]
#![warn(clippy::filetype_is_file)]
#![warn(clippy::filter_map_next)]
#![warn(clippy::flat_map_option)]
#![warn(clippy::fn_to_numeric_cast_any)]
#![warn(clippy::format_push_string)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::imprecise_flops)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::iter_filter_is_ok)]
#![warn(clippy::iter_filter_is_some)]
#![warn(clippy::large_types_passed_by_value)]
#![warn(clippy::manual_string_new)]
#![warn(clippy::option_as_ref_cloned)]
#![warn(clippy::renamed_function_params)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::too_long_first_doc_paragraph)]

#[macro_use]
#[doc(hidden)]
pub mod macros;

pub mod severity;
pub mod error;
pub mod config;
pub mod record;
pub mod sink;
pub mod logger;
pub mod shared;

pub use config::LoggerConfig;
pub use error::{ParseSeverityError, SinkError, SinkErrorKind};
pub use logger::DailyLogger;
pub use record::{LogCall, Record};
pub use severity::Severity;
pub use shared::SharedLogger;
pub use sink::Sink;
