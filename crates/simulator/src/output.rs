use std::fs::File;
use std::io::{self, BufWriter, Write};

use lattice::sweep::SweepPoint;
use quantum::PhaseReadout;

use crate::error::{SimulatorError, SimulatorResult};

/// One row per (w, level): the data behind the spectrum-vs-w plot.
pub fn write_spectrum_csv(path: &str, points: &[SweepPoint]) -> SimulatorResult<()> {
    write_with(path, |f| {
        writeln!(f, "w,index,energy")?;
        for p in points {
            for (index, energy) in p.energies.iter().enumerate() {
                writeln!(f, "{},{},{}", p.w, index, energy)?;
            }
        }
        Ok(())
    })
}

pub fn write_counts_csv(path: &str, rows: &[PhaseReadout]) -> SimulatorResult<()> {
    write_with(path, |f| {
        writeln!(f, "bitstring,count,probability,phase,energy,error")?;
        for r in rows {
            let error = r.error.map(|e| e.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{},{},{},{},{},{}",
                r.bitstring, r.count, r.probability, r.phase, r.energy, error
            )?;
        }
        Ok(())
    })
}

fn write_with<F>(path: &str, body: F) -> SimulatorResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let result = File::create(path).and_then(|file| {
        let mut f = BufWriter::new(file);
        body(&mut f)?;
        f.flush()
    });
    result.map_err(|source| SimulatorError::Output {
        path: path.to_string(),
        source,
    })
}
