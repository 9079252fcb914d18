//! Typed setters for every chart parameter the service understands.

use super::image_charts::ImageCharts;

macro_rules! chart_parameters {
    ($( $(#[$doc:meta])* $key:ident ),* $(,)?) => {
        /// Keys with a dedicated setter on [`ImageCharts`], in declaration order.
        pub const CHART_PARAMETERS: &[&str] = &[$(stringify!($key)),*];

        impl ImageCharts {
            $(
                $(#[$doc])*
                pub fn $key(self, value: impl Into<String>) -> Self {
                    self.set(stringify!($key), value)
                }
            )*
        }

        #[cfg(test)]
        const PARAMETER_SETTERS: &[(&str, fn(ImageCharts, String) -> ImageCharts)] = &[
            $((stringify!($key), |chart: ImageCharts, value: String| chart.$key(value))),*
        ];
    };
}

chart_parameters! {
    /// Chart type, e.g. `bvg`, `lc`, `p`, `gv`.
    cht,
    /// Chart data, e.g. `a:-100,200.5,75.55,110` or `t:10,20,30|15,25,35`.
    chd,
    /// Custom scaling for text-format data (`-80,140`), or `a` for automatic.
    chds,
    /// QR code data encoding. Only `UTF-8` is supported.
    choe,
    /// QR code error correction level and optional margin, e.g. `L|4`.
    chld,
    /// Axis data range, e.g. `0,0,500|1,0,200`.
    chxr,
    /// Fake output extension appended to the URL (`.png` or `.gif`).
    chof,
    /// Chart size as `<width>x<height>`.
    chs,
    /// Legend text, one label per series separated by `|`.
    chdl,
    /// Legend text color and font size, e.g. `9e9e9e,17`.
    chdls,
    /// Solid or dotted grid lines, e.g. `0,1,1,5`.
    chg,
    /// Series colors as comma separated `RRGGBB[AA]` values.
    chco,
    /// Chart title.
    chtt,
    /// Chart title color and font size, e.g. `00FF00,17`.
    chts,
    /// Visible axes, e.g. `x,y`.
    chxt,
    /// Custom axis labels, e.g. `0:|Jan|July|Jan`.
    chxl,
    /// Axis label styles, e.g. `1,0000DD`.
    chxs,
    /// Compound charts, line fills and markers.
    chm,
    /// Line thickness and dash style, e.g. `3,6,3|5`.
    chls,
    /// Bar, pie, doughnut and polar labels. Overrides `chdl`.
    chl,
    /// Chart margins, e.g. `30,30,30,30`.
    chma,
    /// Legend position and entry order.
    chdlp,
    /// Background fills, e.g. `bg,s,FFFFFF`.
    chf,
    /// Animation settings. Setting it makes the chart a gif.
    chan,
    /// Doughnut chart inside label.
    chli,
    /// Enterprise account id. Requests carrying it are signed when a secret is configured.
    icac,
    /// HMAC-SHA256 request signature. Normally appended by [`ImageCharts::to_url`].
    ichm,
    /// Default Google Fonts family for all text.
    icff,
    /// Default font style for all text.
    icfs,
    /// Localization (ISO 639-1).
    iclocale,
    /// Retina mode, `1` to enable.
    icretina,
    /// QR code background color.
    icqrb,
    /// QR code foreground color.
    icqrf,
}

/// Whether `key` has a dedicated setter.
pub fn is_known_parameter(key: &str) -> bool {
    CHART_PARAMETERS.contains(&key)
}
