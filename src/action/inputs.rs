use super::{Inputs, Vars};

pub struct EnvInputs {
    vars: Vars,
}

impl EnvInputs {
    pub fn new(vars: Vars) -> Self {
        EnvInputs { vars }
    }
}

impl Inputs for EnvInputs {
    fn get_raw(&self, name: &str) -> Option<String> {
        self.vars.get(&input_variable(name)).cloned()
    }
}

/// `release name` is handed over as `INPUT_RELEASE_NAME`.
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
