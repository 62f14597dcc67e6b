/// Page geometry, fonts, and colors.  All lengths are in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) border_color: &'static str,

    pub(crate) year: TextStyle,
    pub(crate) year_padding_top: f64,
    pub(crate) year_padding_left: f64,

    pub(crate) month_width: f64,
    pub(crate) month_height: f64,
    pub(crate) month_margin_right: f64,
    pub(crate) month_margin_bottom: f64,
    pub(crate) month_offset_top: f64,
    pub(crate) month: TextStyle,
    pub(crate) month_padding_top: f64,

    pub(crate) week: TextStyle,
    pub(crate) week_weekend_color: &'static str,
    pub(crate) week_padding_top: f64,

    pub(crate) day_width: f64,
    pub(crate) day_height: f64,
    pub(crate) day: TextStyle,
    pub(crate) day_holiday_color: &'static str,
    pub(crate) day_special_color: &'static str,
    pub(crate) day_padding_top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TextStyle {
    pub(crate) font_family: &'static str,
    pub(crate) font_size: f64,
    pub(crate) color: &'static str,
}

const FONT: &str = "Consolas";

const HOLIDAY_COLOR: &str = "#79B1D4";

pub(crate) const DEFAULT_THEME: Theme = Theme {
    width: 100.0,
    height: 70.0,
    border_color: "#ccc",

    year: TextStyle {
        font_family: FONT,
        font_size: 5.0,
        color: "#666666",
    },
    year_padding_top: 5.0,
    year_padding_left: 2.0,

    month_width: 24.0,
    month_height: 21.0,
    month_margin_right: 0.0,
    month_margin_bottom: 0.0,
    month_offset_top: 5.0,
    month: TextStyle {
        font_family: FONT,
        font_size: 3.0,
        color: "#FF9525",
    },
    month_padding_top: 3.0,

    week: TextStyle {
        font_family: FONT,
        font_size: 1.5,
        color: "#999",
    },
    week_weekend_color: HOLIDAY_COLOR,
    week_padding_top: 6.0,

    day_width: 23.0 / 7.0,
    day_height: 12.0 / 5.0,
    day: TextStyle {
        font_family: FONT,
        font_size: 2.0,
        color: "#000000",
    },
    day_holiday_color: HOLIDAY_COLOR,
    day_special_color: "#FF0000",
    day_padding_top: 6.0,
};

impl Default for Theme {
    fn default() -> Theme {
        DEFAULT_THEME
    }
}
