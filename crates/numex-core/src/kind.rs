use derive_more::Display;
use std::fmt;

///
/// Kind
///
/// The six primitive numeric result kinds and their promotion lattice.
///
/// IMPORTANT:
/// The lattice is part of stable composition behavior: combining the same
/// operand kinds must yield the same result kind regardless of grouping.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Kind {
    #[display("byte")]
    Byte,
    #[display("short")]
    Short,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("float")]
    Float,
    #[display("double")]
    Double,
}

impl Kind {
    pub const ALL: [Self; 6] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Width of the primitive representation in bits.
    #[must_use]
    pub const fn width(self) -> u8 {
        match self {
            Self::Byte => 8,
            Self::Short => 16,
            Self::Int | Self::Float => 32,
            Self::Long | Self::Double => 64,
        }
    }

    /// Lattice position used by `combine`: sub-int kinds widen to int
    /// before any pairwise promotion.
    const fn normalized(self) -> Self {
        match self {
            Self::Byte | Self::Short => Self::Int,
            other => other,
        }
    }

    /// Arithmetic promotion for plus/minus/multiply.
    ///
    /// Equal normalized kinds keep that kind; any two distinct normalized
    /// kinds promote to double. Commutative and associative, so jointly
    /// promoting any number of operands is grouping-independent.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self.normalized(), other.normalized()) {
            (Self::Int, Self::Int) => Self::Int,
            (Self::Long, Self::Long) => Self::Long,
            (Self::Float, Self::Float) => Self::Float,
            _ => Self::Double,
        }
    }

    /// Floor-division promotion: one step up in width from the wider
    /// integral operand, saturating at long.
    ///
    /// Floor division is not defined for float kinds.
    #[must_use]
    pub const fn combine_floor(self, other: Self) -> Self {
        assert!(
            self.is_integral() && other.is_integral(),
            "floor division is only defined for integral kinds"
        );

        let wider = if self.width() >= other.width() {
            self
        } else {
            other
        };

        match wider {
            Self::Byte => Self::Short,
            Self::Short => Self::Int,
            _ => Self::Long,
        }
    }
}

///
/// ExpressionType
///
/// Stable tag identifying an expression's kind and nullability. The tag is
/// fixed at construction and fully determines which primitive accessor the
/// expression carries.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExpressionType {
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteNullable = 7,
    ShortNullable = 8,
    IntNullable = 9,
    LongNullable = 10,
    FloatNullable = 11,
    DoubleNullable = 12,
}

impl ExpressionType {
    pub const ALL: [Self; 12] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::ByteNullable,
        Self::ShortNullable,
        Self::IntNullable,
        Self::LongNullable,
        Self::FloatNullable,
        Self::DoubleNullable,
    ];

    /// The primitive result kind, nullability stripped.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Byte | Self::ByteNullable => Kind::Byte,
            Self::Short | Self::ShortNullable => Kind::Short,
            Self::Int | Self::IntNullable => Kind::Int,
            Self::Long | Self::LongNullable => Kind::Long,
            Self::Float | Self::FloatNullable => Kind::Float,
            Self::Double | Self::DoubleNullable => Kind::Double,
        }
    }

    #[must_use]
    pub const fn is_nullable(self) -> bool {
        self as u8 > Self::Double as u8
    }

    /// The nullable tag of the same kind.
    #[must_use]
    pub const fn as_nullable(self) -> Self {
        match self.kind() {
            Kind::Byte => Self::ByteNullable,
            Kind::Short => Self::ShortNullable,
            Kind::Int => Self::IntNullable,
            Kind::Long => Self::LongNullable,
            Kind::Float => Self::FloatNullable,
            Kind::Double => Self::DoubleNullable,
        }
    }

    /// The non-nullable tag of the same kind.
    #[must_use]
    pub const fn as_non_nullable(self) -> Self {
        match self.kind() {
            Kind::Byte => Self::Byte,
            Kind::Short => Self::Short,
            Kind::Int => Self::Int,
            Kind::Long => Self::Long,
            Kind::Float => Self::Float,
            Kind::Double => Self::Double,
        }
    }

    /// Stable human-readable tag label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::ByteNullable => "byte_nullable",
            Self::ShortNullable => "short_nullable",
            Self::IntNullable => "int_nullable",
            Self::LongNullable => "long_nullable",
            Self::FloatNullable => "float_nullable",
            Self::DoubleNullable => "double_nullable",
        }
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// TESTS
///
