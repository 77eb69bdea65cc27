use include_dir::{include_dir, Dir};
use std::fmt;
use std::str::FromStr;

/// License texts shipped with the tool, keyed by `License::license_file()`
static BUNDLED_LICENSE_TEXTS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources/licenses");

/// Static catalog data for one license identifier
struct LicenseSpec {
    id: &'static str,
    names: &'static [&'static str],
    urls: &'static [&'static str],
    license_file: &'static str,
}

/// License catalog entry
///
/// A closed set of license identifiers. Each identifier knows its display-name
/// aliases and URL aliases (the first of each is the preferred one) and the
/// name of the license-text resource that is written next to the generated
/// LICENSE document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum License {
    Unknown,
    Custom,
    Commercial,
    Afl,
    Agpl,
    Apache1_1,
    Apache2,
    Bsd2,
    Bsd3,
    Bsl,
    Cc0,
    CcBy2_5,
    CcBy3,
    Cddl,
    Cddl1_1,
    Cpl,
    Edl,
    Epl,
    Gpl2,
    Gpl2Classpath,
    Gpl3,
    Gpl3Classpath,
    Json,
    Lgpl2_1,
    Lgpl3,
    Mit,
    Icu,
    Mozilla1_1,
    Mozilla2,
    MsPl,
    Osgi,
    Ofl,
    Php3_01,
    Python,
    PublicDomain,
    Ruby,
    Sleepycat,
    Ncsa,
    W3c,
    Wtfpl,
    Zlib,
}

impl License {
    /// Every catalog entry, in reverse-lookup preference order
    pub const ALL: [License; 41] = [
        License::Unknown,
        License::Custom,
        License::Commercial,
        License::Afl,
        License::Agpl,
        License::Apache1_1,
        License::Apache2,
        License::Bsd2,
        License::Bsd3,
        License::Bsl,
        License::Cc0,
        License::CcBy2_5,
        License::CcBy3,
        License::Cddl,
        License::Cddl1_1,
        License::Cpl,
        License::Edl,
        License::Epl,
        License::Gpl2,
        License::Gpl2Classpath,
        License::Gpl3,
        License::Gpl3Classpath,
        License::Json,
        License::Lgpl2_1,
        License::Lgpl3,
        License::Mit,
        License::Icu,
        License::Mozilla1_1,
        License::Mozilla2,
        License::MsPl,
        License::Osgi,
        License::Ofl,
        License::Php3_01,
        License::Python,
        License::PublicDomain,
        License::Ruby,
        License::Sleepycat,
        License::Ncsa,
        License::W3c,
        License::Wtfpl,
        License::Zlib,
    ];

    fn spec(&self) -> &'static LicenseSpec {
        match self {
            License::Unknown => &LicenseSpec {
                id: "UNKNOWN",
                names: &["Unknown License"],
                urls: &[],
                license_file: "",
            },
            License::Custom => &LicenseSpec {
                id: "CUSTOM",
                names: &["Custom License"],
                urls: &[],
                license_file: "",
            },
            License::Commercial => &LicenseSpec {
                id: "COMMERCIAL",
                names: &["Commercial License", "Commercial", "Proprietary License"],
                urls: &[],
                license_file: "",
            },
            License::Afl => &LicenseSpec {
                id: "AFL",
                names: &[
                    "Academic Free License (\"AFL\") v. 3.0",
                    "AFL",
                    "AFL 3.0",
                    "Academic Free License 3.0",
                ],
                urls: &["http://opensource.org/licenses/afl-3.0"],
                license_file: "LICENSE.AFLv3",
            },
            License::Agpl => &LicenseSpec {
                id: "AGPL",
                names: &[
                    "The Affero GPL License",
                    "Affero GPL",
                    "AGPL",
                    "Affero GPL 3",
                    "GNU AFFERO GENERAL PUBLIC LICENSE, Version 3 (AGPL-3.0)",
                    "GNU AFFERO GENERAL PUBLIC LICENSE, Version 3",
                    "GNU AFFERO GENERAL PUBLIC LICENSE (AGPL-3.0)",
                    "GNU AFFERO GENERAL PUBLIC LICENSE",
                ],
                urls: &[
                    "http://www.gnu.org/licenses/agpl.html",
                    "http://www.gnu.org/licenses/agpl.txt",
                    "http://www.opensource.org/licenses/agpl-v3.html",
                    "http://www.opensource.org/licenses/agpl-v3",
                    "http://opensource.org/licenses/agpl-v3.html",
                    "http://opensource.org/licenses/agpl-v3",
                ],
                license_file: "LICENSE.AGPLv3",
            },
            License::Apache1_1 => &LicenseSpec {
                id: "APACHE_1_1",
                names: &[
                    "The Apache Software License, Version 1.1",
                    "Apache 1.1",
                    "Apache Software License, Version 1.1",
                    "Apache Software License 1.1",
                    "Apache License 1.1",
                ],
                urls: &[
                    "http://www.apache.org/licenses/LICENSE-1.1",
                    "http://www.apache.org/licenses/LICENSE-1.1.txt",
                    "http://apache.org/licenses/LICENSE-1.1",
                    "http://apache.org/licenses/LICENSE-1.1.txt",
                    "http://www.opensource.org/licenses/Apache-1.1",
                    "http://opensource.org/licenses/Apache-1.1",
                ],
                license_file: "LICENSE.Apachev1.1",
            },
            License::Apache2 => &LicenseSpec {
                id: "APACHE_2",
                names: &[
                    "The Apache Software License, Version 2.0",
                    "Apache 2",
                    "Apache 2.0",
                    "Apache-2.0",
                    "Apache Software License, Version 2.0",
                    "Apache License, version 2.0",
                    "Apache Software License 2.0",
                    "Apache License Version 2.0",
                    "Apache License 2.0",
                ],
                urls: &[
                    "http://www.apache.org/licenses/LICENSE-2.0",
                    "http://www.apache.org/licenses/LICENSE-2.0.txt",
                    "http://www.apache.org/licenses/LICENSE-2.0.html",
                    "https://www.apache.org/licenses/LICENSE-2.0",
                    "https://www.apache.org/licenses/LICENSE-2.0.txt",
                    "http://apache.org/licenses/LICENSE-2.0",
                    "http://apache.org/licenses/LICENSE-2.0.txt",
                    "http://apache.org/licenses/LICENSE-2.0.html",
                    "http://www.opensource.org/licenses/Apache-2.0",
                    "http://opensource.org/licenses/Apache-2.0",
                ],
                license_file: "LICENSE.Apachev2",
            },
            License::Bsd2 => &LicenseSpec {
                id: "BSD_2",
                names: &[
                    "BSD 2-Clause \"Simplified\" or \"FreeBSD\" license",
                    "BSD 2",
                    "BSD-2-Clause",
                    "FreeBSD",
                    "FreeBSD License",
                    "Simplified BSD License",
                ],
                urls: &[
                    "http://opensource.org/licenses/BSD-2-Clause",
                    "http://opensource.org/licenses/bsd-license",
                ],
                license_file: "LICENSE.BSD2",
            },
            License::Bsd3 => &LicenseSpec {
                id: "BSD_3",
                names: &[
                    "BSD 3-Clause License",
                    "BSD",
                    "BSD 3",
                    "BSD-3-Clause",
                    "BSD License",
                    "BSD 3 License",
                    "New BSD License",
                    "Revised BSD License",
                    "BSD 3-Clause",
                    "BSD 3-Clause \"New\" or \"Revised\" license",
                ],
                urls: &[
                    "http://opensource.org/licenses/BSD-3-Clause",
                    "http://asm.objectweb.org/license.html",
                    "http://asm.ow2.org/license.html",
                    "http://antlr.org/license.html",
                ],
                license_file: "LICENSE.BSD3",
            },
            License::Bsl => &LicenseSpec {
                id: "BSL",
                names: &[
                    "Boost Software License 1.0 (BSL-1.0)",
                    "Boost",
                    "BSL",
                    "BSL-1.0",
                    "BSL 1.0",
                    "Boost Software License Version 1.0",
                    "Boost Software License 1.0",
                ],
                urls: &[
                    "http://www.opensource.org/licenses/BSL-1.0",
                    "http://opensource.org/licenses/BSL-1.0",
                ],
                license_file: "LICENSE.BSL",
            },
            License::Cc0 => &LicenseSpec {
                id: "CC0",
                names: &[
                    "Public Domain, per Creative Commons CC0",
                    "CC0",
                    "CC0 1.0 Universal",
                ],
                urls: &["http://creativecommons.org/publicdomain/zero/1.0/"],
                license_file: "LICENSE.CC0",
            },
            License::CcBy2_5 => &LicenseSpec {
                id: "CC_BY_25",
                names: &[
                    "Creative Commons Attribution (CC-A) 2.5",
                    "CC-BY 2.5",
                    "CC-A 2.5",
                    "Attribution 2.5 Generic (CC BY 2.5)",
                ],
                urls: &["https://creativecommons.org/licenses/by/2.5/legalcode"],
                license_file: "LICENSE.CC_BY_2.5",
            },
            License::CcBy3 => &LicenseSpec {
                id: "CC_BY_3",
                names: &[
                    "Creative Commons Attribution (CC-A) 3.0",
                    "CC-A 3.0",
                    "CC-A",
                    "CC-BY 3",
                    "CC-BY 3.0",
                    "Attribution 3.0 Unported (CC BY 3.0)",
                ],
                urls: &["https://creativecommons.org/licenses/by/3.0/legalcode"],
                license_file: "LICENSE.CC_BY_3",
            },
            License::Cddl => &LicenseSpec {
                id: "CDDL",
                names: &[
                    "Common Development and Distribution License",
                    "CDDL",
                    "Common Development and Distribution License (CDDL)",
                    "CDDL License",
                    "COMMON DEVELOPMENT AND DISTRIBUTION LICENSE (CDDL) Version 1.0",
                ],
                urls: &["http://opensource.org/licenses/CDDL-1.0"],
                license_file: "VERSION.CDDL",
            },
            License::Cddl1_1 => &LicenseSpec {
                id: "CDDL_1_1",
                names: &[
                    "Common Development and Distribution License Version 1.1",
                    "CDDL 1.1",
                    "Common Development and Distribution License (CDDL 1.1)",
                    "CDDL License v1.1",
                    "COMMON DEVELOPMENT AND DISTRIBUTION LICENSE (CDDL) Version 1.1",
                ],
                urls: &["https://javaee.github.io/glassfish/LICENSE"],
                license_file: "VERSION.CDDLv1.1",
            },
            License::Cpl => &LicenseSpec {
                id: "CPL",
                names: &["Common Public License Version 1.0", "CPL"],
                urls: &["http://www.opensource.org/licenses/cpl1.0.txt"],
                license_file: "LICENSE.CPL",
            },
            License::Edl => &LicenseSpec {
                id: "EDL",
                names: &[
                    "Eclipse Distribution License (EDL)",
                    "EDL",
                    "EDL 1.0",
                    "Eclipse Distribution License",
                    "Eclipse Distribution License - v 1.0",
                ],
                urls: &["http://www.eclipse.org/org/documents/edl-v10.html"],
                license_file: "LICENSE.EDL",
            },
            License::Epl => &LicenseSpec {
                id: "EPL",
                names: &[
                    "Eclipse Public License (EPL)",
                    "EPL",
                    "EPL 1.0",
                    "Eclipse Public License",
                    "Eclipse Public License - v 1.0",
                    "Eclipse Public License Version 1.0",
                ],
                urls: &[
                    "http://www.eclipse.org/legal/epl-v10.html",
                    "http://opensource.org/licenses/EPL-1.0",
                    "http://www.opensource.org/licenses/EPL-1.0",
                    "http://opensource.org/licenses/eclipse-1.0.txt",
                ],
                license_file: "LICENSE.EPL",
            },
            License::Gpl2 => &LicenseSpec {
                id: "GPLv2",
                names: &[
                    "GNU General Public License, version 2",
                    "GPLv2",
                    "GNU General Public License (GPLv2)",
                    "The GNU General Public License, Version 2",
                ],
                urls: &[
                    "http://www.gnu.org/licenses/gpl-2.0.txt",
                    "http://opensource.org/licenses/GPL-2.0",
                ],
                license_file: "LICENSE.GPLv2",
            },
            License::Gpl2Classpath => &LicenseSpec {
                id: "GPLv2_CLASSPATH",
                names: &[
                    "GNU General Public License, version 2, with the Classpath Exception",
                    "GPLv2, with the Classpath Exception",
                    "GNU General Public License (GPLv2), with the Classpath Exception",
                    "The GNU General Public License, Version 2, with the Classpath Exception",
                ],
                urls: &["https://openjdk.org/legal/gplv2+ce.html"],
                license_file: "LICENSE.GPLv2_CP",
            },
            License::Gpl3 => &LicenseSpec {
                id: "GPLv3",
                names: &[
                    "GNU General Public License, version 3",
                    "GPL",
                    "GPLv3",
                    "GNU General Public License (GPLv3)",
                    "The GNU General Public License, Version 3",
                ],
                urls: &[
                    "http://www.gnu.org/licenses/gpl-3.0.txt",
                    "http://opensource.org/licenses/GPL-3.0",
                ],
                license_file: "LICENSE.GPLv3",
            },
            License::Gpl3Classpath => &LicenseSpec {
                id: "GPLv3_CLASSPATH",
                names: &[
                    "GNU General Public License, version 3, with the Classpath Exception",
                    "GPLv3, with the Classpath Exception",
                    "GNU General Public License (GPLv3), with the Classpath Exception",
                    "The GNU General Public License, Version 3, with the Classpath Exception",
                ],
                urls: &["https://www.gnu.org/software/classpath/license.html"],
                license_file: "LICENSE.GPLv3_CP",
            },
            License::Json => &LicenseSpec {
                id: "JSON",
                names: &["The JSON License", "JSON License"],
                urls: &["http://www.json.org/license.html"],
                license_file: "LICENSE.JSON",
            },
            License::Lgpl2_1 => &LicenseSpec {
                id: "LGPLv2_1",
                names: &[
                    "GNU Lesser General Public License, version 2.1",
                    "LGPL-2.1",
                    "LGPL 2.1",
                    "GNU Library General Public License, version 2.1",
                    "GNU Library General Public License (LGPL-2.1)",
                    "GNU Lesser General Public License (LGPL-2.1)",
                    "GNU \"Lesser\" General Public License, version 2.1",
                    "GNU \"Lesser\" General Public License (LGPL-2.1)",
                    "GNU Library or \"Lesser\" General Public License, version 2.1",
                    "GNU Library or \"Lesser\" General Public License (LGPL-2.1)",
                    "GNU Lesser Public License, version 2.1",
                ],
                urls: &[
                    "http://www.gnu.org/licenses/old-licenses/lgpl-2.1.html",
                    "https://opensource.org/licenses/LGPL-2.1",
                ],
                license_file: "LICENSE.LGPLv2.1",
            },
            License::Lgpl3 => &LicenseSpec {
                id: "LGPLv3",
                names: &[
                    "GNU Lesser General Public License, version 3",
                    "LGPL-3",
                    "LGPL 3",
                    "GNU Library General Public License, version 3",
                    "GNU Library General Public License (LGPL-3)",
                    "GNU Lesser General Public License (LGPL-3)",
                    "GNU \"Lesser\" General Public License, version 3",
                    "GNU \"Lesser\" General Public License (LGPL-3)",
                    "GNU Library or \"Lesser\" General Public License, version 3",
                    "GNU Library or \"Lesser\" General Public License (LGPL-3)",
                    "GNU Lesser Public License, version 3",
                ],
                urls: &[
                    "http://www.gnu.org/licenses/lgpl-3.0.html",
                    "http://www.opensource.org/licenses/lgpl-license",
                    "http://opensource.org/licenses/lgpl-license",
                    "http://www.gnu.org/licenses/lgpl.html",
                ],
                license_file: "LICENSE.LGPLv3",
            },
            License::Mit => &LicenseSpec {
                id: "MIT",
                names: &[
                    "MIT License",
                    "MIT",
                    "X11",
                    "X11 License",
                    "MIT/X Consortium License",
                    "Expat License",
                    "Bouncy Castle Licence",
                    "The PostgreSQL License",
                ],
                urls: &[
                    "http://opensource.org/licenses/MIT",
                    "http://www.opensource.org/licenses/MIT",
                    "https://opensource.org/licenses/MIT",
                    "https://www.bouncycastle.org/licence.html",
                    "http://www.postgresql.org/about/licence/",
                ],
                license_file: "LICENSE.MIT",
            },
            License::Icu => &LicenseSpec {
                id: "ICU",
                names: &["ICU License", "ICU"],
                urls: &["http://source.icu-project.org/repos/icu/icu/branches/maint/maint-4-8/license.html"],
                license_file: "LICENSE.ICU",
            },
            License::Mozilla1_1 => &LicenseSpec {
                id: "MOZILLA_1_1",
                names: &[
                    "Mozilla Public License 1.1",
                    "MPL-1.1",
                    "Mozilla Public License, Version 1.1",
                ],
                urls: &[
                    "http://opensource.org/licenses/MPL-1.1",
                    "http://www.mozilla.org/media/MPL/1.1/index.txt",
                ],
                license_file: "LICENSE.MPLv1.1",
            },
            License::Mozilla2 => &LicenseSpec {
                id: "MOZILLA_2",
                names: &[
                    "Mozilla Public License 2.0",
                    "MPL-2",
                    "MPL-2.0",
                    "Mozilla Public License, Version 2.0",
                ],
                urls: &[
                    "http://opensource.org/licenses/MPL-2.0",
                    "http://www.mozilla.org/MPL/2.0/index.txt",
                ],
                license_file: "LICENSE.MPLv2",
            },
            License::MsPl => &LicenseSpec {
                id: "MS_PL",
                names: &[
                    "Microsoft Public License (MS-PL)",
                    "MS-PL",
                    "Microsoft Public License",
                ],
                urls: &[
                    "http://opensource.org/licenses/ms-pl.html",
                    "http://opensource.org/licenses/MS-PL",
                ],
                license_file: "LICENSE.MSPL",
            },
            License::Osgi => &LicenseSpec {
                id: "OSGI",
                names: &["OSGi Specification License, Version 2.0"],
                urls: &["http://www.osgi.org/Specifications/Licensing"],
                license_file: "LICENSE.OSGI",
            },
            License::Ofl => &LicenseSpec {
                id: "OFL",
                names: &["Open Font License", "OFL-1.1"],
                urls: &[
                    "http://scripts.sil.org/OFL",
                    "http://opensource.org/licenses/OFL-1.1",
                ],
                license_file: "LICENSE.OFLv1.1",
            },
            License::Php3_01 => &LicenseSpec {
                id: "PHP_3_1",
                names: &[
                    "The PHP License, version 3.01",
                    "PHP License 3.01",
                    "PHP License, version 3.01",
                ],
                urls: &["http://php.net/license/3_01.txt"],
                license_file: "LICENSE.PHPv3.01",
            },
            License::Python => &LicenseSpec {
                id: "PYTHON",
                names: &[
                    "Python License, Version 2 (Python-2.0)",
                    "Python",
                    "Python-2.0",
                    "Python License",
                    "Python License 2.0",
                    "Python License (Python-2.0)",
                    "Python Software Foundation License",
                    "PYTHON SOFTWARE FOUNDATION LICENSE VERSION 2",
                ],
                urls: &["http://opensource.org/licenses/PythonSoftFoundation"],
                license_file: "LICENSE.PYTHON",
            },
            License::PublicDomain => &LicenseSpec {
                id: "PUBLIC_DOMAIN",
                names: &["Public Domain"],
                urls: &[
                    "http://creativecommons.org/licenses/publicdomain/",
                    "http://creativecommons.org/publicdomain/mark/1.0/",
                ],
                license_file: "LICENSE.Public",
            },
            License::Ruby => &LicenseSpec {
                id: "RUBY",
                names: &["Ruby License", "Ruby"],
                urls: &[
                    "http://www.ruby-lang.org/en/LICENSE.txt",
                    "http://www.ruby-lang.org/en/about/license.txt",
                ],
                license_file: "LICENSE.RUBY",
            },
            License::Sleepycat => &LicenseSpec {
                id: "SLEEPYCAT",
                names: &[
                    "The Sleepycat License",
                    "Sleepycat",
                    "The Sleepycat License (Sleepycat)",
                    "Sleepycat License",
                    "The Sleepycat Public License",
                    "Berkeley Database License",
                    "The Berkeley Database License",
                ],
                urls: &["http://opensource.org/licenses/sleepycat"],
                license_file: "LICENSE.Sleepycat",
            },
            License::Ncsa => &LicenseSpec {
                id: "NCSA",
                names: &[
                    "The University of Illinois/NCSA Open Source License (NCSA)",
                    "NCSA",
                    "UoI-NCSA",
                    "The University of Illinois/NCSA Open Source License",
                    "University of Illinois/NCSA Open Source License (NCSA)",
                    "University of Illinois/NCSA Open Source License",
                ],
                urls: &["http://opensource.org/licenses/UoI-NCSA.php"],
                license_file: "LICENSE.NCSA",
            },
            License::W3c => &LicenseSpec {
                id: "W3C",
                names: &[
                    "The W3C SOFTWARE NOTICE AND LICENSE (W3C)",
                    "W3C",
                    "The W3C SOFTWARE NOTICE AND LICENSE",
                    "W3C SOFTWARE NOTICE AND LICENSE (W3C)",
                    "W3C SOFTWARE NOTICE AND LICENSE",
                    "W3C® SOFTWARE NOTICE AND LICENSE",
                ],
                urls: &[
                    "http://www.w3.org/Consortium/Legal/2002/copyright-software-20021231",
                    "http://opensource.org/licenses/W3C.php",
                ],
                license_file: "LICENSE.W3C",
            },
            License::Wtfpl => &LicenseSpec {
                id: "WTFPL",
                names: &[
                    "WTFPL – Do What the Fuck You Want to Public License",
                    "WTFPL",
                    "Do What the Fuck You Want to Public License",
                ],
                urls: &["http://www.wtfpl.net/", "http://www.wtfpl.net/txt/copying/"],
                license_file: "LICENSE.WTFPL",
            },
            License::Zlib => &LicenseSpec {
                id: "ZLIB",
                names: &["The zlib/libpng License (Zlib)", "Zlib", "The zlib/libpng License"],
                urls: &["http://opensource.org/licenses/zlib-license"],
                license_file: "LICENSE.ZLIB",
            },
        }
    }

    /// Stable identifier, used as the wire name in the license blob
    pub fn id(&self) -> &'static str {
        self.spec().id
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.spec().names
    }

    pub fn urls(&self) -> &'static [&'static str] {
        self.spec().urls
    }

    pub fn preferred_name(&self) -> &'static str {
        self.spec().names.first().copied().unwrap_or_default()
    }

    /// Preferred URL, or an empty string for identifiers without one
    pub fn preferred_url(&self) -> &'static str {
        self.spec().urls.first().copied().unwrap_or_default()
    }

    /// Name of the license-text resource, empty when there is no fixed text
    pub fn license_file(&self) -> &'static str {
        self.spec().license_file
    }

    /// Bundled license text, empty when the identifier has no text resource
    pub fn license_text(&self) -> &'static [u8] {
        let file_name = self.license_file();
        if file_name.is_empty() {
            return &[];
        }

        BUNDLED_LICENSE_TEXTS
            .get_file(file_name)
            .map(|file| file.contents())
            .unwrap_or_default()
    }

    /// Decodes a wire identifier. `MIT_X11` is accepted as an alias of `MIT`.
    pub fn from_id(id: &str) -> Option<License> {
        if id.eq_ignore_ascii_case("MIT_X11") {
            return Some(License::Mit);
        }

        License::ALL
            .iter()
            .copied()
            .find(|license| license.id().eq_ignore_ascii_case(id))
    }

    /// Reverse lookup by display name (case-insensitive). Defaults to UNKNOWN.
    pub fn resolve_by_name(name: &str) -> License {
        let name = name.trim();
        if name.is_empty() {
            return License::Unknown;
        }

        License::ALL
            .iter()
            .copied()
            .find(|license| license.names().iter().any(|n| n.eq_ignore_ascii_case(name)))
            .unwrap_or(License::Unknown)
    }

    /// Reverse lookup by URL (case-insensitive). Defaults to UNKNOWN.
    pub fn resolve_by_url(url: &str) -> License {
        let url = url.trim();
        if url.is_empty() {
            return License::Unknown;
        }

        License::ALL
            .iter()
            .copied()
            .find(|license| license.urls().iter().any(|u| u.eq_ignore_ascii_case(url)))
            .unwrap_or(License::Unknown)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for License {
    type Err = String;

    /// Accepts a catalog identifier, then a display name, then a URL
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(license) = License::from_id(s.trim()) {
            return Ok(license);
        }

        let by_name = License::resolve_by_name(s);
        if by_name != License::Unknown {
            return Ok(by_name);
        }

        let by_url = License::resolve_by_url(s);
        if by_url != License::Unknown {
            return Ok(by_url);
        }

        Err(format!(
            "Unknown license: '{}'. Use a catalog identifier such as APACHE_2, MIT or CUSTOM",
            s
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        assert_eq!(License::resolve_by_name("apache 2"), License::Apache2);
        assert_eq!(License::resolve_by_name("MIT LICENSE"), License::Mit);
        assert_eq!(License::resolve_by_name("  BSD  "), License::Bsd3);
    }

    #[test]
    fn test_resolve_by_name_defaults_to_unknown() {
        assert_eq!(License::resolve_by_name(""), License::Unknown);
        assert_eq!(License::resolve_by_name("Not A License"), License::Unknown);
    }

    #[test]
    fn test_resolve_by_url() {
        assert_eq!(
            License::resolve_by_url("http://www.apache.org/licenses/LICENSE-2.0.txt"),
            License::Apache2
        );
        assert_eq!(
            License::resolve_by_url("HTTP://OPENSOURCE.ORG/LICENSES/MIT"),
            License::Mit
        );
        assert_eq!(License::resolve_by_url(""), License::Unknown);
        assert_eq!(License::resolve_by_url("https://example.com"), License::Unknown);
    }

    #[test]
    fn test_preferred_name_and_url_are_first_alias() {
        assert_eq!(
            License::Apache2.preferred_name(),
            "The Apache Software License, Version 2.0"
        );
        assert_eq!(
            License::Apache2.preferred_url(),
            "http://www.apache.org/licenses/LICENSE-2.0"
        );
        assert_eq!(License::Custom.preferred_url(), "");
    }

    #[test]
    fn test_name_aliases_are_unique_across_catalog() {
        let mut seen: HashMap<String, License> = HashMap::new();
        for license in License::ALL {
            for name in license.names() {
                let key = name.to_ascii_lowercase();
                if let Some(existing) = seen.insert(key, license) {
                    assert_eq!(existing, license, "alias '{}' is ambiguous", name);
                }
            }
        }
    }

    #[test]
    fn test_url_aliases_are_unique_across_catalog() {
        let mut seen: HashMap<String, License> = HashMap::new();
        for license in License::ALL {
            for url in license.urls() {
                let key = url.to_ascii_lowercase();
                if let Some(existing) = seen.insert(key, license) {
                    assert_eq!(existing, license, "url '{}' is ambiguous", url);
                }
            }
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for license in License::ALL {
            assert_eq!(License::from_id(license.id()), Some(license));
        }
        assert_eq!(License::from_id("MIT_X11"), Some(License::Mit));
        assert_eq!(License::from_id("NOT_A_LICENSE"), None);
    }

    #[test]
    fn test_license_text_empty_without_resource() {
        assert!(License::Unknown.license_text().is_empty());
        assert!(License::Custom.license_text().is_empty());
        assert!(License::Commercial.license_text().is_empty());
    }

    #[test]
    fn test_license_text_bundled() {
        let text = String::from_utf8_lossy(License::Apache2.license_text());
        assert!(text.contains("Apache License"));
        assert!(text.contains("Version 2.0, January 2004"));

        let mit = String::from_utf8_lossy(License::Mit.license_text());
        assert!(mit.contains("Permission is hereby granted, free of charge"));
    }

    #[test]
    fn test_every_license_file_is_bundled() {
        for license in License::ALL {
            if license.license_file().is_empty() {
                continue;
            }
            assert!(
                !license.license_text().is_empty(),
                "{} names {} but no text is bundled",
                license.id(),
                license.license_file()
            );
        }
    }

    #[test]
    fn test_license_text_bundled_for_copyleft_variants() {
        let classpath = String::from_utf8_lossy(License::Gpl2Classpath.license_text());
        assert!(classpath.contains("GNU GENERAL PUBLIC LICENSE"));
        assert!(classpath.contains("\"CLASSPATH\" EXCEPTION"));

        let cddl = String::from_utf8_lossy(License::Cddl1_1.license_text());
        assert!(cddl.contains("Version 1.1"));
    }

    #[test]
    fn test_from_str_accepts_id_name_and_url() {
        assert_eq!("APACHE_2".parse::<License>().unwrap(), License::Apache2);
        assert_eq!("apache_2".parse::<License>().unwrap(), License::Apache2);
        assert_eq!("Apache License 2.0".parse::<License>().unwrap(), License::Apache2);
        assert_eq!(
            "http://opensource.org/licenses/MIT".parse::<License>().unwrap(),
            License::Mit
        );
        assert_eq!("custom".parse::<License>().unwrap(), License::Custom);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "definitely-not-a-license".parse::<License>().unwrap_err();
        assert!(err.contains("Unknown license"));
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(License::Gpl2Classpath.to_string(), "GPLv2_CLASSPATH");
        assert_eq!(License::Lgpl2_1.to_string(), "LGPLv2_1");
    }
}
