use crate::forge::{ForgeError, Result};

/// Byte order used when packing multi-byte integer fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
	/// Least significant byte first (default).
	#[default]
	Little,
	/// Most significant byte first.
	Big,
}

impl Endianness {
	/// Parse a byte-order selector string (`"little"`/`"le"` or `"big"`/`"be"`).
	pub fn parse(selector: &str) -> Result<Self> {
		match selector {
			"little" | "le" => Ok(Self::Little),
			"big" | "be" => Ok(Self::Big),
			_ => Err(ForgeError::UnknownEndianness {
				selector: selector.to_owned(),
			}),
		}
	}
}

/// Closed set of scalar codec kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// Unsigned 8-bit integer.
	U8,
	/// Signed 8-bit integer.
	I8,
	/// Unsigned 16-bit integer.
	U16,
	/// Signed 16-bit integer.
	I16,
	/// Unsigned 32-bit integer.
	U32,
	/// Signed 32-bit integer.
	I32,
	/// Opaque byte blob whose width tracks its content.
	Buffer,
}

impl ScalarKind {
	/// Fixed width in bytes, or `None` for the blob kind.
	pub fn width(self) -> Option<usize> {
		match self {
			Self::U8 | Self::I8 => Some(1),
			Self::U16 | Self::I16 => Some(2),
			Self::U32 | Self::I32 => Some(4),
			Self::Buffer => None,
		}
	}

	/// Whether values are read back with sign extension.
	pub fn is_signed(self) -> bool {
		matches!(self, Self::I8 | Self::I16 | Self::I32)
	}

	fn label(self) -> &'static str {
		match self {
			Self::U8 => "Unsigned Byte",
			Self::I8 => "Signed Byte",
			Self::U16 => "Unsigned Short",
			Self::I16 => "Signed Short",
			Self::U32 => "Unsigned Long",
			Self::I32 => "Signed Long",
			Self::Buffer => "Buffer",
		}
	}
}

fn residue_mask(width: usize) -> u64 {
	(1_u64 << (8 * width)) - 1
}

#[derive(Debug, Clone)]
enum ScalarValue {
	Int(u64),
	Bytes(Vec<u8>),
}

/// Fixed-width integer or byte-blob leaf with a defined packed encoding.
///
/// Integer assignment always truncates to the field width; byte assignment
/// decodes using the field's configured byte order, symmetric with
/// [`pack`](Self::pack), so a full-width byte assignment round-trips
/// unchanged for either order.
#[derive(Debug, Clone)]
pub struct ScalarField {
	kind: ScalarKind,
	endianness: Endianness,
	value: ScalarValue,
}

impl ScalarField {
	fn int(kind: ScalarKind, value: i64) -> Self {
		let width = kind.width().unwrap_or(0);
		Self {
			kind,
			endianness: Endianness::Little,
			value: ScalarValue::Int(value as u64 & residue_mask(width)),
		}
	}

	/// Unsigned 8-bit field; the value is truncated to one byte.
	pub fn u8(value: i64) -> Self {
		Self::int(ScalarKind::U8, value)
	}

	/// Signed 8-bit field; the value is truncated to one byte.
	pub fn i8(value: i64) -> Self {
		Self::int(ScalarKind::I8, value)
	}

	/// Unsigned 16-bit field, little-endian unless reconfigured.
	pub fn u16(value: i64) -> Self {
		Self::int(ScalarKind::U16, value)
	}

	/// Signed 16-bit field, little-endian unless reconfigured.
	pub fn i16(value: i64) -> Self {
		Self::int(ScalarKind::I16, value)
	}

	/// Unsigned 32-bit field, little-endian unless reconfigured.
	pub fn u32(value: i64) -> Self {
		Self::int(ScalarKind::U32, value)
	}

	/// Signed 32-bit field, little-endian unless reconfigured.
	pub fn i32(value: i64) -> Self {
		Self::int(ScalarKind::I32, value)
	}

	/// Byte-blob field; the width always equals the content length.
	pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			kind: ScalarKind::Buffer,
			endianness: Endianness::Little,
			value: ScalarValue::Bytes(bytes.into()),
		}
	}

	/// Select the byte order used by `pack` (chainable at construction).
	pub fn with_endianness(mut self, endianness: Endianness) -> Self {
		self.endianness = endianness;
		self
	}

	/// Codec kind tag.
	pub fn kind(&self) -> ScalarKind {
		self.kind
	}

	/// Configured byte order.
	pub fn endianness(&self) -> Endianness {
		self.endianness
	}

	/// Store an integer, reduced modulo 2^(8 * width); blob fields reject integers.
	pub fn set_int(&mut self, value: i64) -> Result<()> {
		let Some(width) = self.kind.width() else {
			return Err(ForgeError::ValueTypeMismatch {
				expected: "bytes",
				got: "integer",
			});
		};

		self.value = ScalarValue::Int(value as u64 & residue_mask(width));
		Ok(())
	}

	/// Store a byte sequence; integer fields decode it per the configured byte order.
	pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		let Some(width) = self.kind.width() else {
			self.value = ScalarValue::Bytes(bytes.to_vec());
			return Ok(());
		};

		if bytes.len() > width {
			return Err(ForgeError::ValueOutOfRange { width, len: bytes.len() });
		}

		let mut buf = [0_u8; 8];
		let raw = match self.endianness {
			Endianness::Little => {
				buf[..bytes.len()].copy_from_slice(bytes);
				u64::from_le_bytes(buf)
			}
			Endianness::Big => {
				buf[8 - bytes.len()..].copy_from_slice(bytes);
				u64::from_be_bytes(buf)
			}
		};
		self.value = ScalarValue::Int(raw);
		Ok(())
	}

	/// Current integer value as raw width-residue bits, or `None` for blobs.
	pub fn int_value(&self) -> Option<u64> {
		match &self.value {
			ScalarValue::Int(raw) => Some(*raw),
			ScalarValue::Bytes(_) => None,
		}
	}

	/// Current blob content, or `None` for integer fields.
	pub fn bytes_value(&self) -> Option<&[u8]> {
		match &self.value {
			ScalarValue::Int(_) => None,
			ScalarValue::Bytes(bytes) => Some(bytes),
		}
	}

	/// Packed width in bytes.
	pub fn length(&self) -> usize {
		match &self.value {
			ScalarValue::Bytes(bytes) => bytes.len(),
			ScalarValue::Int(_) => self.kind.width().unwrap_or(0),
		}
	}

	/// Emit exactly `length()` bytes in the configured byte order.
	pub fn pack(&self) -> Vec<u8> {
		match &self.value {
			ScalarValue::Bytes(bytes) => bytes.clone(),
			ScalarValue::Int(raw) => self.pack_raw(*raw),
		}
	}

	/// Encode an externally computed value with this field's width and order.
	pub(crate) fn pack_raw(&self, raw: u64) -> Vec<u8> {
		let width = self.kind.width().unwrap_or(0);
		let truncated = self.truncate(raw);
		match self.endianness {
			Endianness::Little => truncated.to_le_bytes()[..width].to_vec(),
			Endianness::Big => truncated.to_be_bytes()[8 - width..].to_vec(),
		}
	}

	/// Reduce a value to this field's width residue.
	pub(crate) fn truncate(&self, raw: u64) -> u64 {
		match self.kind.width() {
			Some(width) => raw & residue_mask(width),
			None => raw,
		}
	}

	/// Short diagnostic label with the current value in hex.
	pub fn describe(&self) -> String {
		match &self.value {
			ScalarValue::Int(raw) => match self.kind.width().unwrap_or(0) {
				1 => format!("{} 0x{raw:02X}", self.kind.label()),
				2 => format!("{} 0x{raw:04X}", self.kind.label()),
				_ => format!("{} 0x{raw:08X}", self.kind.label()),
			},
			ScalarValue::Bytes(bytes) => {
				let hex: String = bytes.iter().take(10).map(|byte| format!("{byte:02x}")).collect();
				if bytes.len() > 10 {
					format!("Buffer 0x{hex}...")
				} else {
					format!("Buffer 0x{hex}")
				}
			}
		}
	}
}
