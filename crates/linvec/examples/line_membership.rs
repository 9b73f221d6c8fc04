//! Exact vs. floating vectors on a small line-membership walkthrough.
//!
//! Run with `RUST_LOG`-style verbosity fixed to debug so the mixed-mode
//! degradation event is visible:
//!   cargo run -p linvec --example line_membership

use anyhow::Result;
use linvec::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let normal = Vector::<Decimal>::from_values(["4.046", "2.836"])?;
    let line = Line::new(normal, "1.21")?;
    tracing::info!(%line, basepoint = ?line.basepoint(), "line");

    for point in [["0.299110", "0"], ["0", "0.426657"], ["1", "1"]] {
        let p = Vector::<Decimal>::from_values(point)?;
        println!("{p} on {line}: {}", line.includes(&p)?);
    }

    let v = Vector::<Decimal>::from_values(["1.0", "0.0"])?;
    let b = Vector::<Decimal>::from_values(["0.5", "0.5"])?;
    println!("projection of {v} onto {b}: {}", v.projected(&b)?);

    let exact = DynVector::new(["0.1", "0.2"], Some(Mode::Exact))?;
    let float = DynVector::new([0.1, 0.2], None)?;
    let sum = exact.try_add(&float)?;
    println!("{exact:?} + {float:?} = {sum:?}");

    let a = Vector::new(vec![3.039, 1.879]);
    let w = Vector::new(vec![0.825, 2.036]);
    println!(
        "angle = {:.3} rad, parallel = {}, orthogonal = {}",
        a.angle(&w)?,
        a.is_parallel(&w)?,
        a.is_orthogonal(&w)?
    );
    Ok(())
}
