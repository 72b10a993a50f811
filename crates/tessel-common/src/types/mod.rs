mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect::new(10.0, 20.0, 800.0, 600.0);
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_unit_square() {
        let r = Rect::unit();
        assert_eq!(r.area(), 1.0);
        assert_eq!(r.center(), (0.5, 0.5));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(0.25, 0.5, 0.5, 0.25);
        assert_eq!(r.right(), 0.75);
        assert_eq!(r.bottom(), 0.75);
    }

    #[test]
    fn rect_inset_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(r.x, 8.0);
        assert_eq!(r.width, 0.0);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#b7a153").unwrap();
        assert_eq!(c, Color::from_rgba(0xb7, 0xa1, 0x53, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_short() {
        let c = Color::from_hex("#ccc").unwrap();
        assert_eq!(c, Color::from_rgba(0xcc, 0xcc, 0xcc, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abcd").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }
}
