//! Execution context: target runtime profile and intrinsics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileParseError;
use crate::value::{FunctionData, Heap, ObjectId, ObjectKind, ObjectRecord};

/// The runtime the generated code is meant to run on.
///
/// Profiles differ in the default descriptor shapes the runtime gives to
/// the objects it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetProfile {
    /// Current browsers
    #[default]
    Browser,
    /// JavaScriptCore 600.1.4.17, as shipped on older mobile devices
    #[serde(rename = "jsc-600-1-4-17")]
    Jsc600,
    /// Mobile runtimes in general
    Mobile,
    /// Node.js command line
    NodeCli,
    /// Node.js with source map support
    NodeSourceMaps,
    /// Node.js with React available
    NodeReact,
    /// www bundles
    FbWww,
    /// React Native
    ReactNative,
}

impl TargetProfile {
    /// The legacy engine whose function `name` properties are not configurable.
    pub const MOBILE_JSC: TargetProfile = TargetProfile::Jsc600;

    /// All known profiles
    pub const ALL: [TargetProfile; 8] = [
        TargetProfile::Browser,
        TargetProfile::Jsc600,
        TargetProfile::Mobile,
        TargetProfile::NodeCli,
        TargetProfile::NodeSourceMaps,
        TargetProfile::NodeReact,
        TargetProfile::FbWww,
        TargetProfile::ReactNative,
    ];

    /// The profile's name as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetProfile::Browser => "browser",
            TargetProfile::Jsc600 => "jsc-600-1-4-17",
            TargetProfile::Mobile => "mobile",
            TargetProfile::NodeCli => "node-cli",
            TargetProfile::NodeSourceMaps => "node-source-maps",
            TargetProfile::NodeReact => "node-react",
            TargetProfile::FbWww => "fb-www",
            TargetProfile::ReactNative => "react-native",
        }
    }

    /// Whether functions get a configurable `name` that the generator can
    /// overwrite after creation.
    pub fn function_names_configurable(self) -> bool {
        self != TargetProfile::MOBILE_JSC
    }
}

impl fmt::Display for TargetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetProfile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| ProfileParseError(s.to_string()))
    }
}

/// Configuration for a [`Realm`].
///
/// Deserializable so it can be read straight from the serializer's options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealmOptions {
    /// Target runtime profile
    pub compatibility: TargetProfile,
}

impl RealmOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for a specific target profile.
    pub fn with_compatibility(compatibility: TargetProfile) -> Self {
        Self { compatibility }
    }
}

/// Handles of the well-known intrinsic objects the inspector consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intrinsics {
    /// `Object.prototype`
    pub object_prototype: ObjectId,

    /// `Function.prototype`
    pub function_prototype: ObjectId,

    /// `Array.prototype`
    pub array_prototype: ObjectId,

    /// `RegExp.prototype`
    pub regexp_prototype: ObjectId,
}

impl Intrinsics {
    /// Allocate the intrinsic objects in `heap`.
    pub fn bootstrap(heap: &mut Heap) -> Self {
        let object_prototype =
            heap.alloc(ObjectRecord::ordinary(None).with_intrinsic_name("ObjectPrototype"));
        let function_prototype = heap.alloc(
            ObjectRecord::function(Some(object_prototype), FunctionData::native("", 0))
                .with_intrinsic_name("FunctionPrototype"),
        );
        let array_prototype = heap.alloc(
            ObjectRecord::new(ObjectKind::Array, Some(object_prototype))
                .with_intrinsic_name("ArrayPrototype"),
        );
        let regexp_prototype = heap.alloc(
            ObjectRecord::ordinary(Some(object_prototype)).with_intrinsic_name("RegExpPrototype"),
        );

        Self {
            object_prototype,
            function_prototype,
            array_prototype,
            regexp_prototype,
        }
    }
}

/// The execution context a heap snapshot was captured in.
#[derive(Debug, Clone)]
pub struct Realm {
    options: RealmOptions,
    intrinsics: Intrinsics,
}

impl Realm {
    /// Create a realm over already allocated intrinsics.
    pub fn new(options: RealmOptions, intrinsics: Intrinsics) -> Self {
        Self {
            options,
            intrinsics,
        }
    }

    /// Allocate intrinsics in `heap` and create a realm over them.
    pub fn bootstrap(heap: &mut Heap, options: RealmOptions) -> Self {
        Self::new(options, Intrinsics::bootstrap(heap))
    }

    /// The configured target profile.
    pub fn compatibility(&self) -> TargetProfile {
        self.options.compatibility
    }

    /// Check if the target runtime is exactly `profile`.
    pub fn is_compatible_with(&self, profile: TargetProfile) -> bool {
        self.options.compatibility == profile
    }

    /// Intrinsic object handles.
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    /// The base object prototype, `Object.prototype`.
    pub fn object_prototype(&self) -> ObjectId {
        self.intrinsics.object_prototype
    }
}
