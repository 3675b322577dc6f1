/// Native and wire disassembly commands.
pub mod disassemble;
/// Structural equality command.
pub mod eq;
/// Content hash command.
pub mod hash;
/// Envelope writing command.
pub mod pack;
/// Rendering and schema commands.
pub mod render;
/// Envelope reading command.
pub mod unpack;
/// Shared input/output helpers.
pub(crate) mod util;
