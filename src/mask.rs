//! Input masks for structured form fields
//!
//! Each mask turns a raw digit sequence into a formatted display string
//! (CPF, date, phone, CEP) and can recover the unmasked value for
//! submission. Applying a mask to already-masked input is a no-op.

/// The supported mask formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// `000.000.000-00`
    Cpf,
    /// `DD/MM/YYYY`
    Date,
    /// `(00) 00000-0000`
    Phone,
    /// `00000-000`
    Zip,
}

impl MaskKind {
    /// The display pattern, where `#` marks a digit slot
    fn pattern(&self) -> &'static str {
        match self {
            MaskKind::Cpf => "###.###.###-##",
            MaskKind::Date => "##/##/####",
            MaskKind::Phone => "(##) #####-####",
            MaskKind::Zip => "#####-###",
        }
    }

    /// How many digits the mask accepts
    pub fn capacity(&self) -> usize {
        self.pattern().chars().filter(|c| *c == '#').count()
    }

    /// The placeholder shown for an empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            MaskKind::Cpf => "000.000.000-00",
            MaskKind::Date => "00/00/0000",
            MaskKind::Phone => "(00) 00000-0000",
            MaskKind::Zip => "00000-000",
        }
    }

    /// Format raw input into the masked display string.
    ///
    /// Non-digits are stripped first, so feeding an already-masked value
    /// back through produces the same result. Digits beyond the mask's
    /// capacity are dropped.
    pub fn apply(&self, raw: &str) -> String {
        let mut digits = raw.chars().filter(char::is_ascii_digit);
        let mut out = String::new();

        for slot in self.pattern().chars() {
            if slot == '#' {
                match digits.next() {
                    Some(d) => out.push(d),
                    None => break,
                }
            } else {
                out.push(slot);
            }
        }

        // Trim trailing separators left by an exhausted digit stream
        while out.ends_with(|c: char| !c.is_ascii_digit()) {
            out.pop();
        }
        out
    }

    /// The digits currently held by a display string
    pub fn unmask_digits(&self, display: &str) -> String {
        display.chars().filter(char::is_ascii_digit).collect()
    }

    /// Recover the unmasked value from a display string.
    ///
    /// Digits only, except for dates: a complete, valid date comes back
    /// in ISO form (`YYYY-MM-DD`) ready for the submission payload.
    pub fn unmask(&self, display: &str) -> String {
        let digits = self.unmask_digits(display);

        if *self == MaskKind::Date && digits.len() == self.capacity() {
            if let Ok(date) = chrono::NaiveDate::parse_from_str(display, "%d/%m/%Y") {
                return date.format("%Y-%m-%d").to_string();
            }
        }

        digits
    }
}
