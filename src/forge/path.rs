use std::fmt;

use crate::forge::{ForgeError, Result};

/// Structural path: an explicit sequence of child-name segments.
///
/// Plain strings passed to [`Container::add`](crate::forge::Container::add)
/// are always literal keys; only a `FieldPath` addresses nested children, so
/// a key containing a literal dot is never mistaken for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	segments: Vec<String>,
}

impl FieldPath {
	/// Parse dotted field syntax into segments.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(ForgeError::InvalidFieldPath { path: input.to_owned() });
		}

		let mut segments = Vec::new();
		for segment in input.split('.') {
			if segment.is_empty() {
				return Err(ForgeError::InvalidFieldPath { path: input.to_owned() });
			}
			segments.push(segment.to_owned());
		}

		Ok(Self { segments })
	}

	/// Build a path from verbatim segments; a segment may contain a literal dot.
	pub fn from_segments<I, S>(segments: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
		if segments.is_empty() || segments.iter().any(String::is_empty) {
			return Err(ForgeError::InvalidFieldPath { path: segments.join(".") });
		}

		Ok(Self { segments })
	}

	/// Ordered segment view.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.segments.join("."))
	}
}

#[cfg(test)]
mod tests {
	use super::FieldPath;

	#[test]
	fn dotted_syntax_splits_into_segments() {
		let path = FieldPath::parse("a.b.c").expect("path parses");
		assert_eq!(path.segments(), ["a", "b", "c"]);
	}

	#[test]
	fn empty_input_is_rejected() {
		assert!(FieldPath::parse("").is_err());
	}

	#[test]
	fn empty_segment_is_rejected() {
		assert!(FieldPath::parse("a..b").is_err());
		assert!(FieldPath::parse(".a").is_err());
		assert!(FieldPath::parse("a.").is_err());
	}

	#[test]
	fn literal_dot_survives_in_explicit_segments() {
		let path = FieldPath::from_segments(["outer", "weird.key"]).expect("segments accepted");
		assert_eq!(path.segments(), ["outer", "weird.key"]);
	}
}
