/// Declares an enumerated information element together with its text table and, if given,
/// its numeric table, and implements the UPER codec for it.
///
/// ```ignore
/// enumerated! {
///     pub enum TReordering: "T-Reordering", numeric u16 {
///         Ms0 = "ms0" => 0,
///         Ms5 = "ms5" => 5,
///         Spare1 = "spare1",
///     }
/// }
/// ```
///
/// Variants without `=> value` have no numeric meaning (spare values, `infinity`, ...). The
/// `extensible` marker declares an enumeration with an extension marker (`...`).
macro_rules! enumerated {
    (@numeric) => {
        None
    };
    (@numeric $numeric:expr) => {
        Some($numeric)
    };
    (
        @base
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $asn:literal, $extensible:literal {
            $($variant:ident = $text:literal),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $($variant,)+
        }

        impl $crate::syn::enumerated::Enumerated for $name {
            const NAME: &'static str = $asn;
            const VARIANTS: &'static [Self] = &[$($name::$variant,)+];
            const TEXT: &'static [&'static str] = &[$($text,)+];
            const EXTENSIBLE: bool = $extensible;

            #[inline]
            fn ordinal(&self) -> u64 {
                *self as u64
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::syn::enumerated::Enumerated::to_text(self))
            }
        }

        impl $crate::syn::Writable for $name {
            #[inline]
            fn write(
                &self,
                writer: &mut $crate::syn::UperWriter,
            ) -> Result<(), $crate::io::per::Error> {
                writer.write_enumerated(self)
            }
        }

        impl $crate::syn::Readable for $name {
            #[inline]
            fn read(
                reader: &mut $crate::syn::UperReader<'_>,
            ) -> Result<Self, $crate::io::per::Error> {
                reader.read_enumerated()
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $asn:literal, numeric $numeric_ty:ty {
            $($variant:ident = $text:literal $(=> $numeric:expr)?),+ $(,)?
        }
    ) => {
        enumerated! {
            @base
            $(#[$meta])*
            $vis enum $name : $asn, false {
                $($variant = $text),+
            }
        }

        impl $crate::syn::enumerated::EnumeratedNumeric for $name {
            type Numeric = $numeric_ty;

            fn to_numeric(&self) -> Option<$numeric_ty> {
                match self {
                    $($name::$variant => enumerated!(@numeric $($numeric)?),)+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $asn:literal, extensible numeric $numeric_ty:ty {
            $($variant:ident = $text:literal $(=> $numeric:expr)?),+ $(,)?
        }
    ) => {
        enumerated! {
            @base
            $(#[$meta])*
            $vis enum $name : $asn, true {
                $($variant = $text),+
            }
        }

        impl $crate::syn::enumerated::EnumeratedNumeric for $name {
            type Numeric = $numeric_ty;

            fn to_numeric(&self) -> Option<$numeric_ty> {
                match self {
                    $($name::$variant => enumerated!(@numeric $($numeric)?),)+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $asn:literal, extensible {
            $($variant:ident = $text:literal),+ $(,)?
        }
    ) => {
        enumerated! {
            @base
            $(#[$meta])*
            $vis enum $name : $asn, true {
                $($variant = $text),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $asn:literal {
            $($variant:ident = $text:literal),+ $(,)?
        }
    ) => {
        enumerated! {
            @base
            $(#[$meta])*
            $vis enum $name : $asn, false {
                $($variant = $text),+
            }
        }
    };
}
