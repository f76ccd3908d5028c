use std::fmt;

use serde::Serialize;

use crate::config::DashboardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Mesmo matiz e saturação, luminosidade reduzida em `amount` pontos (mínimo 0%).
    pub fn darken(self, amount: u8) -> Hsl {
        Hsl {
            l: self.l.saturating_sub(amount),
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSettings {
    pub saturacao: u8,
    pub luminosidade: u8,
    pub escurecimento_borda: u8,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        PaletteSettings {
            saturacao: 60,
            luminosidade: 65,
            escurecimento_borda: 20,
        }
    }
}

impl From<&DashboardConfig> for PaletteSettings {
    fn from(config: &DashboardConfig) -> Self {
        PaletteSettings {
            saturacao: config.saturacao,
            luminosidade: config.luminosidade,
            escurecimento_borda: config.escurecimento_borda,
        }
    }
}

impl PaletteSettings {
    /// `n` cores com matizes espaçados igualmente no círculo: hue_i = round(360 / n * i).
    pub fn palette(&self, n: usize) -> Vec<Hsl> {
        let step = 360.0 / n.max(1) as f64;
        (0..n)
            .map(|i| Hsl {
                h: (step * i as f64).round() as u16,
                s: self.saturacao,
                l: self.luminosidade,
            })
            .collect()
    }

    pub fn border(&self, colors: &[Hsl]) -> Vec<Hsl> {
        colors
            .iter()
            .map(|c| c.darken(self.escurecimento_borda))
            .collect()
    }

    /// Cores de preenchimento e de borda como texto CSS.
    pub fn css(&self, n: usize) -> (Vec<String>, Vec<String>) {
        let fill = self.palette(n);
        let border = self.border(&fill);
        (
            fill.iter().map(Hsl::to_string).collect(),
            border.iter().map(Hsl::to_string).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_colors() {
        let p = PaletteSettings::default().palette(4);
        let hues: Vec<u16> = p.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![0, 90, 180, 270]);
        assert_eq!(p[1].to_string(), "hsl(90 60% 65%)");
    }

    #[test]
    fn test_rounded_hues() {
        // 360 / 7 = 51.43 → 0, 51, 103, 154, 206, 257, 309
        let hues: Vec<u16> = PaletteSettings::default()
            .palette(7)
            .iter()
            .map(|c| c.h)
            .collect();
        assert_eq!(hues, vec![0, 51, 103, 154, 206, 257, 309]);
    }

    #[test]
    fn test_empty_palette() {
        assert!(PaletteSettings::default().palette(0).is_empty());
    }

    #[test]
    fn test_distinct_hues_up_to_360() {
        let settings = PaletteSettings::default();
        for n in [1, 2, 12, 100, 359, 360] {
            let p = settings.palette(n);
            assert_eq!(p.len(), n);
            let hues: HashSet<u16> = p.iter().map(|c| c.h).collect();
            assert_eq!(hues.len(), n, "n = {}", n);
        }
    }

    #[test]
    fn test_deterministic() {
        let settings = PaletteSettings::default();
        assert_eq!(settings.palette(12), settings.palette(12));
    }

    #[test]
    fn test_border_darkened_and_floored() {
        let settings = PaletteSettings {
            luminosidade: 15,
            ..PaletteSettings::default()
        };
        let (fill, border) = settings.css(2);
        assert_eq!(fill[1], "hsl(180 60% 15%)");
        assert_eq!(border[1], "hsl(180 60% 0%)");

        let normal = PaletteSettings::default();
        assert_eq!(normal.palette(1)[0].darken(20).l, 45);
    }
}
