//! Browser automation module
//!
//! Drives Chrome over WebDriver to get fully rendered category pages.

pub mod driver;
mod executor;
pub mod scroll;
mod traits;

pub use driver::WebDriverEndpoint;
pub use executor::BrowserExecutor;
pub use scroll::scroll_until_stable;
pub use traits::{PageSource, Scrollable};
