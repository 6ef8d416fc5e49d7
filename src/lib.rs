// Do this because numerics calls for a lot of non-standard names
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod error;
pub mod special;
pub mod taper;

pub use error::{TaperError, TaperResult};
pub use taper::{fit_parameters, BaylissTaper, FitParameters, DEFAULT_TERMS};
