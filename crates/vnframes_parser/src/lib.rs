//! VerbNet class file parsing for vnframes.
//!
//! This crate provides:
//! - [`Element`] - An owned element tree read with `quick-xml`
//! - Syntax token and thematic role parsing
//! - [`ClassNode`] - Class/subclass trees and inheritance flattening
//! - [`ClassHierarchyLoader`] - File and directory loading
//!
//! # Example
//!
//! ```
//! use vnframes_foundation::Diagnostics;
//! use vnframes_parser::ClassHierarchyLoader;
//!
//! let xml = r#"<VNCLASS ID="give-13.1">
//!   <MEMBERS><MEMBER name="give"/></MEMBERS>
//!   <FRAMES><FRAME><DESCRIPTION primary="NP V NP"/>
//!     <SYNTAX><NP value="Agent"/><VERB/><NP value="Theme"/></SYNTAX>
//!   </FRAME></FRAMES>
//! </VNCLASS>"#;
//!
//! let mut diagnostics = Diagnostics::new();
//! let classes = ClassHierarchyLoader::new().load_str(xml, &mut diagnostics).unwrap();
//! assert_eq!(classes[0].frames[0].joined(), "NP V NP");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod class_node;
pub mod loader;
pub mod syntax;
pub mod xml;

pub use class_node::{ClassFrames, ClassNode, FrameSpec};
pub use loader::{ClassHierarchyLoader, LoadReport, ROOT_ELEMENT, class_files};
pub use syntax::{parse_role, parse_syntax, parse_token};
pub use xml::Element;
