use super::flag::Flag;
use super::param::{Param, ParamType};

/// Recognises registered flags and parameters in an argument vector.
///
/// Register what to look for, call [`parse`](Self::parse) with the program's
/// arguments, then look descriptors up by name.
#[derive(Debug, Clone, Default)]
pub struct ClargParser {
    flags: Vec<Flag>,
    params: Vec<Param>,
}

impl ClargParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for `-name`. Returns `false` and changes nothing if `name` is
    /// already registered.
    pub fn add_flag(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.flag(&name).is_some() {
            return false;
        }
        self.flags.push(Flag::new(name));
        true
    }

    /// Look for `-name=value` and convert the value to `param_type`.
    ///
    /// The first registration of a name wins: a later call with the same name
    /// returns `false` even when the type differs.
    pub fn add_param(&mut self, name: impl Into<String>, param_type: ParamType) -> bool {
        let name = name.into();
        if self.param(&name).is_some() {
            return false;
        }
        self.params.push(Param::new(name, param_type));
        true
    }

    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// `None` when `name` was never registered.
    pub fn flag(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.name() == name)
    }

    /// `None` when `name` was never registered.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// Registered flags in registration order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Registered parameters in registration order.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Scan `args`, skipping the program name at index 0.
    ///
    /// Results of any earlier call are cleared first. A token may switch on a
    /// flag and set every parameter whose key it starts with. When a parameter
    /// appears more than once the last occurrence wins.
    pub fn parse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.flags.iter_mut().for_each(Flag::reset);
        self.params.iter_mut().for_each(Param::reset);

        for arg in args.into_iter().skip(1) {
            let token = arg.as_ref();

            for flag in self.flags.iter_mut().filter(|f| f.matches(token)) {
                flag.mark_found();
            }

            for param in self.params.iter_mut() {
                if let Some(raw) = param.strip_key(token) {
                    param.set_raw(raw);
                }
            }
        }
    }

    /// Parse the arguments this process was started with.
    pub fn parse_env(&mut self) {
        self.parse(std::env::args());
    }
}
