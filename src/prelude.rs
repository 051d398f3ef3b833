pub use crate::codec::{Codec, CodecConfig, LogicalChannelMessage};
pub use crate::diag::{CollectingSink, DiagnosticSink, NoopSink, TracingSink};
pub use crate::io::per::{Error, ErrorKind};
pub use crate::messages::*;
pub use crate::syn::choice::{ExplicitOrDefault, SetupRelease, UnknownAlternative};
pub use crate::syn::critical::CriticalExtensions;
pub use crate::syn::enumerated::{Enumerated, EnumeratedNumeric};
pub use crate::syn::extension::{ExtensionState, OpaqueExtension};
pub use crate::syn::{Null, Readable, UperReader, UperWriter, Writable};
