use crate::immut_data::dynamic::BotCfg;

pub(crate) trait CfgExt {
    fn discord_token(&self) -> &str;
    fn cfg(&self) -> BotCfg;
}

macro_rules! impl_cfg_ext {
    ($t:ty) => {
        impl crate::bots::CfgExt for $t {
            fn discord_token(&self) -> &str {
                &self.cfg.discord_token
            }

            fn cfg(&self) -> crate::immut_data::dynamic::BotCfg {
                self.cfg.clone()
            }
        }
    };
}

pub(super) use impl_cfg_ext;
