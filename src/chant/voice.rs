/// A voice offered by the speech engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// The voice chosen for narration, plus the locale applied when the engine
/// default has to be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceSelection {
    locale: String,
    voice: Option<Voice>,
}

impl VoiceSelection {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            voice: None,
        }
    }

    /// Pick from `voices`: exact region first (`en-in`), then the base
    /// language (`en-`), then whatever comes first.
    pub fn choose(&mut self, voices: &[Voice]) {
        let region = self.locale.to_lowercase();
        let base = match region.split_once('-') {
            Some((language, _)) => format!("{language}-"),
            None => format!("{region}-"),
        };

        self.voice = voices
            .iter()
            .find(|v| v.lang.to_lowercase().contains(&region))
            .or_else(|| voices.iter().find(|v| v.lang.to_lowercase().starts_with(&base)))
            .or_else(|| voices.first())
            .cloned();
    }

    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    /// Language tag for outgoing requests.
    pub fn lang(&self) -> &str {
        match &self.voice {
            Some(voice) if !voice.lang.is_empty() => &voice.lang,
            _ => &self.locale,
        }
    }
}
