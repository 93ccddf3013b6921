use ljdsf::core::forcefield::settings::GlobalSettings;
use ljdsf::engine::ledger::EnergyTally;
use ljdsf::engine::pair_style::LjCutCoulDsf;
use std::fmt::Write;

pub fn settings_summary(settings: &GlobalSettings) -> String {
    format!(
        "damping = {}, alpha = {}, cut_lj = {}, cut_coul = {}, self = {}, shift = {}, mix = {}, tail = {}",
        settings.damping,
        settings.alpha,
        settings.cut_lj_global,
        settings.cut_coul,
        yes_no(settings.self_energy),
        yes_no(settings.offset),
        settings.mixing,
        yes_no(settings.tail),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn energy_summary(tally: &EnergyTally, style: &LjCutCoulDsf) -> String {
    let mut out = String::new();
    let e = &tally.energy;
    let _ = writeln!(out, "E_vdwl  = {:>16.8}", e.vdw);
    let _ = writeln!(out, "E_coul  = {:>16.8}", e.coulomb);
    let _ = writeln!(out, "E_total = {:>16.8}", e.total());
    if style.global_settings().tail {
        let _ = writeln!(out, "E_tail  = {:>16.8}  (divide by volume)", style.etail());
        let _ = writeln!(out, "P_tail  = {:>16.8}  (divide by volume squared)", style.ptail());
    }
    let v = &tally.virial;
    let _ = write!(
        out,
        "Virial  = [xx {:.6}, yy {:.6}, zz {:.6}, xy {:.6}, xz {:.6}, yz {:.6}]",
        v[0], v[1], v[2], v[3], v[4], v[5]
    );
    out
}

pub fn pair_table(style: &LjCutCoulDsf) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3} {:>3} {:>12} {:>12} {:>10} {:>14} {:>8}",
        "i", "j", "epsilon", "sigma", "cut_lj", "offset", "source"
    );
    let table = style.table();
    let n = table.ntypes();
    for i in 1..=n {
        for j in i..=n {
            let c = table.get(i, j);
            let _ = writeln!(
                out,
                "{:>3} {:>3} {:>12.6} {:>12.6} {:>10.4} {:>14.6e} {:>8}",
                i,
                j,
                c.epsilon,
                c.sigma,
                c.cut_lj,
                c.offset,
                if c.explicit { "explicit" } else { "mixed" }
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ljdsf::engine::config::HostSettings;

    #[test]
    fn settings_summary_lists_every_switch() {
        let s = GlobalSettings::new(0.2, 10.0);
        let text = settings_summary(&s);
        assert!(text.contains("damping = erfc"));
        assert!(text.contains("self = yes"));
        assert!(text.contains("mix = arithmetic"));
        assert!(text.contains("tail = no"));
    }

    #[test]
    fn pair_table_marks_mixed_entries() {
        let mut style = LjCutCoulDsf::from_args(2, &["0.2", "2.5"]).unwrap();
        style.coeff(&["1", "1", "1.0", "1.0"]).unwrap();
        style.coeff(&["2", "2", "0.5", "2.0"]).unwrap();
        style.init(HostSettings::new(1.0), true, None).unwrap();
        let text = pair_table(&style);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(2).unwrap().contains("mixed"));
    }

    #[test]
    fn energy_summary_omits_tail_when_disabled() {
        let style = LjCutCoulDsf::from_args(1, &["0.2", "2.5"]).unwrap();
        let text = energy_summary(&EnergyTally::new(), &style);
        assert!(text.contains("E_total"));
        assert!(!text.contains("E_tail"));
    }
}
