// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Alpha for drawing is supplied separately since particle opacity and link
// fade are continuous values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// CSS `rgba()` string with `alpha` scaled by this color's own alpha channel.
    pub fn css(&self, alpha: f64) -> String {
        let alpha = (alpha * self.a as f64 / 255.0).max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x64ffdaff);
        assert_eq!(
            c,
            Color {
                r: 0x64,
                g: 0xff,
                b: 0xda,
                a: 0xff
            }
        );
    }

    #[test]
    fn css_uses_requested_alpha() {
        let c = Color::from_u32(0x64ffdaff);
        assert_eq!(c.css(0.5), "rgba(100, 255, 218, 0.5)");
        assert_eq!(c.css(2.0), "rgba(100, 255, 218, 1)");
    }
}
