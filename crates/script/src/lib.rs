//! Drawing scripts for the pixel grid.
//!
//! Scripts are line-delimited JSON commands (see [`protocol`]) applied in order
//! to a grid owned by a [`Session`].
//!
//! # Example
//!
//! ```
//! use pixel_grid_script::{parse_script, Session};
//!
//! let script = r#"
//! {"op":"create","width":3,"height":2}
//! {"op":"paintHorizontal","x1":0,"x2":2,"y":1,"color":4}
//! {"op":"dump"}
//! "#;
//!
//! let commands = parse_script(script).unwrap();
//! let dumps = Session::new().run(&commands).unwrap();
//! assert_eq!(dumps, vec!["0, 0, 0, \n4, 4, 4, \n".to_string()]);
//! ```

pub mod error;
pub mod protocol;
pub mod session;

pub use error::ScriptError;
pub use protocol::{parse_script, to_script, Command};
pub use session::{Outcome, Session};
