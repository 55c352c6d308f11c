//! Parser tests.
//!
//! - `tree`: Indented AST dump shared by the other modules
//! - `parser`: Accepted programs compared against their tree dumps
//! - `errors`: Rejected programs and the span of the first error
//! - `properties`: Property tests over generated expressions
