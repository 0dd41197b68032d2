/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please read YAML through the YamlRead trait rather than calling
//       serde_yaml directly, so that typos in config files get reported.

#![allow(non_snake_case)]

use crate::FailResult;

use std::collections::BTreeMap;
use std::io::Read;

use qecell_lattice::Settings;

/// Alternative to `serde_yaml::from_reader` that warns on unrecognized keys.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> FailResult<Self>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> FailResult<Self> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Self::from_str(&s)
    }

    fn from_str(s: &str) -> FailResult<Self> {
        // serde_ignored needs a Deserializer, and serde_yaml only gives us one
        // through Value.
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;

        match Self::__serde_ignored__from_value(value) {
            Ok(out) => Ok(out),
            Err(_) => {
                // errors produced through Value have lost their positions,
                // so parse again for a better message.
                Self::__serde_yaml__from_str(s)?;
                bail!("YAML was rejected, but only when read through serde_ignored");
            },
        }
    }

    #[doc(hidden)]
    fn __serde_ignored__from_value(value: serde_yaml::Value) -> FailResult<Self>;
    #[doc(hidden)]
    fn __serde_yaml__from_str(s: &str) -> FailResult<Self>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl crate::config::YamlRead for $Type {
            fn __serde_ignored__from_value(value: serde_yaml::Value) -> crate::FailResult<$Type> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                ).map_err(Into::into)
            }

            fn __serde_yaml__from_str(s: &str) -> crate::FailResult<$Type> {
                serde_yaml::from_str(s).map_err(Into::into)
            }
        }
    };
}

derive_yaml_read!{Settings}
derive_yaml_read!{Input}

/// Input of `qecell-ibrav`.
///
/// ```yaml
/// cell:
///   a1: [10.2, 0.0, 0.0]
///   a2: [0.0, 10.2, 0.0]
///   a3: [0.0, 0.0, 10.2]
/// bravais-index: 9        # optional; classified from the cell if absent
/// alt-axes: bcoA-type     # optional
/// ```
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Input {
    /// Lattice vectors in Bohr, keyed by `a1`, `a2` and `a3`.
    pub cell: BTreeMap<String, Vec<f64>>,

    /// Bravais index as written in the XML schema (`0..=14`).
    #[serde(default)]
    pub bravais_index: Option<i32>,

    #[serde(default)]
    pub alt_axes: Option<String>,
}
