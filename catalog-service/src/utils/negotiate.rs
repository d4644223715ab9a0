/// Output shapes the detail endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Markup,
    Structured,
}

impl Representation {
    fn for_media_range(range: &str) -> Option<Self> {
        match range {
            "text/html" | "text/*" | "*/*" => Some(Representation::Markup),
            "application/json" | "application/*" => Some(Representation::Structured),
            _ => None,
        }
    }

    /// Picks a representation from an `Accept` header value.
    ///
    /// Ranges are tried by descending `q`, keeping header order among equals.
    /// `None` means nothing acceptable was offered.
    pub fn negotiate(accept: Option<&str>) -> Option<Self> {
        let accept = match accept.map(str::trim) {
            None | Some("") => return Some(Representation::Markup),
            Some(value) => value,
        };

        let mut ranges: Vec<(f32, String)> = accept
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let range = parts.next()?.trim().to_ascii_lowercase();
                let quality = parts
                    .filter_map(|param| {
                        let (key, value) = param.split_once('=')?;
                        (key.trim() == "q").then(|| value.trim().parse::<f32>().ok())?
                    })
                    .next()
                    .unwrap_or(1.0);
                (quality > 0.0 && !range.is_empty()).then_some((quality, range))
            })
            .collect();

        ranges.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranges
            .iter()
            .find_map(|(_, range)| Self::for_media_range(range))
    }
}
