// ============================================================================
// Lookup Tables
// ============================================================================
//
// Closed code tables (farm types, plant types, currencies, ...). Each table
// is an enum whose variants are its entries; `get` resolves a caller code
// case-insensitively and `list_all` enumerates the table in display order.
//
// ============================================================================

pub trait Lookup: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Stable wire code, e.g. `organic`
    fn code(&self) -> &'static str;

    /// Human readable label, e.g. `Organic`
    fn label(&self) -> &'static str;

    fn get(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.code().eq_ignore_ascii_case(code))
    }

    fn list_all() -> &'static [Self] {
        Self::ALL
    }
}

/// Declares a lookup enum whose serde representation is its code.
macro_rules! lookup_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $crate::domain::lookup::Lookup for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::domain::lookup::Lookup::code(self))
            }
        }
    };
}

pub(crate) use lookup_table;
