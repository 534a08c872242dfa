//! string utilities

mod search;
#[doc(inline)]
pub use search::{
    any_eq_ignore_ascii_case, any_starts_with_ignore_ascii_case, starts_with_ignore_ascii_case,
};
