#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tag: StatusTag,
}

/// Last-result message plus the running log shown under the controls.
#[derive(Debug, Default, Clone)]
pub struct StatusReporter {
    message: Option<StatusLine>,
    log: Vec<StatusLine>,
}

impl StatusReporter {
    pub fn log_line(&mut self, text: impl Into<String>, tag: StatusTag) {
        self.log.push(StatusLine {
            text: text.into(),
            tag,
        });
    }

    pub fn set_message(&mut self, text: impl Into<String>, tag: StatusTag) {
        self.message = Some(StatusLine {
            text: text.into(),
            tag,
        });
    }

    pub fn message(&self) -> Option<&StatusLine> {
        self.message.as_ref()
    }

    pub fn log(&self) -> &[StatusLine] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_replaced_log_is_appended() {
        let mut status = StatusReporter::default();
        status.set_message("first", StatusTag::Error);
        status.set_message("second", StatusTag::Success);
        status.log_line("one", StatusTag::Info);
        status.log_line("two", StatusTag::Error);

        let message = status.message().unwrap();
        assert_eq!(message.text, "second");
        assert_eq!(message.tag, StatusTag::Success);
        assert_eq!(status.log().len(), 2);
        assert_eq!(status.log()[1].text, "two");
    }
}
