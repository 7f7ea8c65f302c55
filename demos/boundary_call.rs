use decode_rail::prelude::*;
use decode_rail::convert::rebase_offset;

/// A toy host that records what would be thrown into the embedding runtime.
#[derive(Default)]
struct Host {
    scheduled: Vec<String>,
}

impl HostRuntime for Host {
    type Exception = String;

    fn new_exception(&mut self, kind: ErrorKind, message: &str) -> String {
        format!("{kind}: {message}")
    }

    fn schedule_exception(&mut self, exception: String) {
        self.scheduled.push(exception);
    }
}

fn read_section_count(section: &[u8]) -> DecodeResult<u8> {
    match section.first() {
        Some(&count) if count <= 16 => DecodeResult::new(count),
        Some(&count) => decode_fail!(0, "section count {} exceeds limit 16", count),
        None => decode_fail!(0, "expected section count, fell off end"),
    }
}

fn decode_module(bytes: &[u8]) -> DecodeResult<u32> {
    if !bytes.starts_with(b"\0asm") {
        return decode_fail!(0, "expected magic word 00 61 73 6d");
    }
    rebase_offset(read_section_count(&bytes[4..]), 4).convert()
}

fn compile(host: &mut Host, bytes: &[u8]) -> Option<u32> {
    let mut errors = ScopedErrorAccumulator::new(host, "WebAssembly.compile()");
    if bytes.is_empty() {
        errors.type_error(format_args!("Argument 0 must be a buffer source"));
        return None;
    }
    errors.compile_result(decode_module(bytes))
}

fn main() {
    let mut host = Host::default();

    let inputs: [&[u8]; 4] = [b"\0asm\x03", b"\0asm\x40", b"\x7fELF", b""];
    for input in inputs {
        match compile(&mut host, input) {
            Some(count) => println!("compiled module with {count} sections"),
            None => println!("compile failed"),
        }
    }

    println!("\nScheduled exceptions:");
    for exception in &host.scheduled {
        println!("  {exception}");
    }
}
