pub mod report;
pub mod sample;

use io_trait::Io;
use std::io::{self, Error};

use self::report::{describe, samples};

/// `rtti [type] <output>`
pub fn run(io: &impl Io) -> io::Result<()> {
    let mut a = io.args();
    a.next();
    let args: Vec<String> = a.collect();
    let (filter, output) = match args.as_slice() {
        [output] => (None, output),
        [name, output] => (Some(name.as_str()), output),
        _ => return Err(Error::other("usage: rtti [type] <output>")),
    };
    let report = render(filter)?;
    io.write(output, report.as_bytes())
}

fn render(filter: Option<&str>) -> io::Result<String> {
    let mut result = String::new();
    let mut found = false;
    for sample in samples() {
        if filter.map_or(true, |name| name == sample.descriptor.name) {
            describe(&sample, &mut result).map_err(Error::other)?;
            found = true;
        }
    }
    if !found {
        return Err(Error::other(format!(
            "unknown type: {}",
            filter.unwrap_or_default()
        )));
    }
    Ok(result)
}
