use camino::Utf8Path;

use periprec::perihelion::PerihelionParams;
use periprec::pipeline;

fn main() {
    let base = Utf8Path::new("horizons_results");
    let params = PerihelionParams::default();

    match pipeline::run(base, &params) {
        Ok(summary) => println!(
            "{base}: {} perihelion passage(s), precession rate {:.2} arcsec/cent",
            summary.perihelia.len(),
            summary.fit.slope_arcsec_per_century()
        ),
        Err(err) => {
            eprintln!("periprec: {err}");
            std::process::exit(1);
        }
    }
}
