//! Text, HTML and column renderings of a computed cosmology.
//!
//! The model only supplies numbers; every layout decision lives here.

use crate::error::AppResult;
use crate::format::{fmt_fixed, fmt_g, fmt_sci};
use cosmo_core::{EPSILON, seconds_to_gyr};
use cosmo_model::{Cosmology, CosmologyParameters};

const SIG_DIGITS: usize = 6;

/// Column header of [`csv_row`].
pub const CSV_HEADER: &str = "Angular Diameter Distance (Mpc), Luminosity Distance (Mpc), \
Comoving Radial Distance (Mpc), Comoving Transverse Distance (Mpc)";

fn g(value: f64) -> String {
    fmt_g(value, SIG_DIGITS)
}

fn shows_curvature(params: &CosmologyParameters) -> bool {
    params.omega_k().abs() > EPSILON
}

/// `H_0 = …, Omega_m = …, Omega_L = …  (q_0 = …)`, prefixed by `leader`.
pub fn params_line(params: &CosmologyParameters, leader: &str) -> String {
    let mut line = format!(
        "{leader}H_0 = {}, Omega_m = {}, Omega_L = {}",
        g(params.h0()),
        g(params.omega_m()),
        g(params.omega_l())
    );
    if shows_curvature(params) {
        line.push_str(&format!(", Omega_k = {}", g(params.omega_k())));
    }
    line.push_str(&format!("  (q_0 = {})\n", g(params.q0())));
    line
}

pub fn params_html(params: &CosmologyParameters) -> String {
    let mut line = format!(
        "H<sub>0</sub> = {}, &#x03A9;<sub>m</sub> = {}, &#x03A9;<sub>&#x039B;</sub> = {}",
        g(params.h0()),
        g(params.omega_m()),
        g(params.omega_l())
    );
    if shows_curvature(params) {
        line.push_str(&format!(", &#x03A9;<sub>k</sub> = {}", g(params.omega_k())));
    }
    line.push_str(&format!("  (q<sub>0</sub> = {})", g(params.q0())));
    line
}

/// Human-readable summary of every derived quantity.
pub fn long_report(cosmo: &Cosmology) -> String {
    let d = cosmo.distances();
    let mut out = params_line(cosmo.params(), "");
    out.push_str(&format!("At z = {}\n", g(d.z)));
    out.push_str(&format!(
        "  age of the Universe at z      = {} Gyr\n",
        g(seconds_to_gyr(cosmo.age_at_z_s()))
    ));
    out.push_str(&format!(
        "  lookback time to z            = {} Gyr\n",
        g(seconds_to_gyr(d.t_l))
    ));
    out.push_str(&format!("  angular diameter distance d_A = {} Mpc\n", g(d.d_a)));
    out.push_str(&format!("  luminosity distance d_L       = {} Mpc\n", g(d.d_l)));
    out.push_str(&format!("  comoving radial distance d_C  = {} Mpc\n", g(d.d_c)));
    if d.d_m != d.d_c {
        out.push_str(&format!("  comoving transverse distance  = {} Mpc\n", g(d.d_m)));
    }
    out.push_str(&format!("  comoving volume out to z      = {} Gpc**3\n", g(d.v_c)));
    out.push_str(&format!(
        "  critical density at z         = {} g cm**-3\n",
        fmt_sci(d.rho_crit, 4)
    ));
    out.push_str(&format!("  1\" = {} kpc\n", fmt_fixed(d.scale, 6)));
    if d.scale != 0.0 {
        out.push_str(&format!("  1 kpc = {}\"\n", fmt_fixed(d.inverse_scale(), 6)));
    }
    out
}

/// Same content as [`long_report`], as an HTML paragraph plus table.
pub fn html_report(cosmo: &Cosmology) -> String {
    let d = cosmo.distances();
    let row = |label: &str, value: String| {
        format!("<tr><td>&nbsp;&nbsp;{label}</td><td>&nbsp;=&nbsp;{value}</td></tr>\n")
    };

    let mut out = format!(
        "<p>{}<br />At z = {}</p>\n<table cellpadding=\"0\" cellspacing=\"\">\n",
        params_html(cosmo.params()),
        g(d.z)
    );
    out.push_str(&row(
        "age of the Universe at z",
        format!("{} Gyr", g(seconds_to_gyr(cosmo.age_at_z_s()))),
    ));
    out.push_str(&row(
        "lookback time to z",
        format!("{} Gyr", g(seconds_to_gyr(d.t_l))),
    ));
    out.push_str(&row(
        "angular diameter distance d<sub>A</sub>",
        format!("{} Mpc", g(d.d_a)),
    ));
    out.push_str(&row(
        "luminosity distance d<sub>L</sub>",
        format!("{} Mpc", g(d.d_l)),
    ));
    out.push_str(&row(
        "comoving radial distance d<sub>C</sub>",
        format!("{} Mpc", g(d.d_c)),
    ));
    if d.d_m != d.d_c {
        out.push_str(&row(
            "comoving transverse distance",
            format!("{} Mpc", g(d.d_m)),
        ));
    }
    out.push_str(&row(
        "comoving volume out to z",
        format!("{} Gpc<sup>3</sup>", g(d.v_c)),
    ));
    out.push_str(&row(
        "critical density at z",
        format!("{} g cm<sup>-3</sup>", fmt_sci(d.rho_crit, 4)),
    ));
    out.push_str(&row("1\"", format!("{} kpc", fmt_fixed(d.scale, 6))));
    if d.scale != 0.0 {
        out.push_str(&row(
            "1 kpc",
            format!("{}\"", fmt_fixed(d.inverse_scale(), 6)),
        ));
    }
    out.push_str("</table>\n");
    out
}

/// Two `#` comment lines heading the tab-separated batch columns.
pub fn short_header(params: &CosmologyParameters) -> String {
    let mut out = params_line(params, "# ");
    out.push_str("# z \td_A \td_L \td_C \tscale \t1/scale \ttL\n");
    out
}

/// One tab-separated row: z, dA, dL, dC, scale, 1/scale, lookback (Gyr).
pub fn short_row(cosmo: &Cosmology) -> String {
    let d = cosmo.distances();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        g(d.z),
        g(d.d_a),
        g(d.d_l),
        g(d.d_c),
        g(d.scale),
        g(d.inverse_scale()),
        g(seconds_to_gyr(d.t_l))
    )
}

pub fn csv_header() -> String {
    format!("{CSV_HEADER}\n")
}

/// One comma-separated row: dA, dL, dC, dM.
pub fn csv_row(cosmo: &Cosmology) -> String {
    format!(
        "{},{},{},{}\n",
        g(cosmo.d_a()),
        g(cosmo.d_l()),
        g(cosmo.d_c()),
        g(cosmo.d_m())
    )
}

/// One JSON object per line with every redshift-dependent quantity.
pub fn json_row(cosmo: &Cosmology) -> AppResult<String> {
    let mut line = serde_json::to_string(cosmo.distances())?;
    line.push('\n');
    Ok(line)
}
