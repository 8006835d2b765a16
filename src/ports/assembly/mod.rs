pub mod assembly_writer;

pub use assembly_writer::AssemblyWriter;
