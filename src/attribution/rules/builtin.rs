use crate::attribution::domain::{AttributionRecord, License, RecordBuilder};

/// A built-in rule: `group[:artifact][:version]` plus the attribution it yields
pub struct BuiltinRule {
    pub coordinate: &'static str,
    pub record: AttributionRecord,
}

fn rule<F>(coordinate: &'static str, name: &str, license: License, configure: F) -> BuiltinRule
where
    F: FnOnce(&mut RecordBuilder),
{
    let mut builder = AttributionRecord::builder(name, license);
    configure(&mut builder);
    BuiltinRule {
        coordinate,
        record: builder.build(),
    }
}

/// Attribution rules for widely used JVM libraries.
///
/// The copyright year is left unset unless an artifact is known to carry a
/// wrong archive date; the scanner backfills it from the artifact.
pub fn builtin_rules() -> Vec<BuiltinRule> {
    vec![
        // 1.4.0 jars carry a 1980 timestamp instead of 2020
        rule("org.jetbrains.kotlin:1.4.0", "Kotlin", License::Apache2, |r| {
            r.copyright(2020)
                .author("JetBrains s.r.o. and Kotlin Programming Language contributors")
                .url("https://github.com/JetBrains/kotlin")
                .note("Kotlin Compiler, Test Data+Libraries, and Tools repository contain third-party code, to which different licenses may apply")
                .note("See: https://github.com/JetBrains/kotlin/blob/master/license/README.md");
        }),
        rule("org.jetbrains.kotlin", "Kotlin", License::Apache2, |r| {
            r.author("JetBrains s.r.o. and Kotlin Programming Language contributors")
                .url("https://github.com/JetBrains/kotlin")
                .note("Kotlin Compiler, Test Data+Libraries, and Tools repository contain third-party code, to which different licenses may apply")
                .note("See: https://github.com/JetBrains/kotlin/blob/master/license/README.md");
        }),
        rule("org.jetbrains.kotlinx", "kotlinx.coroutines", License::Apache2, |r| {
            r.description("Library support for Kotlin coroutines with multiplatform support")
                .url("https://github.com/Kotlin/kotlinx.coroutines")
                .author("JetBrains s.r.o.");
        }),
        rule("org.jetbrains:annotations", "Java Annotations", License::Apache2, |r| {
            r.description("Annotations for JVM-based languages")
                .url("https://github.com/JetBrains/java-annotations")
                .author("JetBrains s.r.o.");
        }),
        rule("com.intellij:annotations", "IntelliJ IDEA Annotations", License::Apache2, |r| {
            r.description("A set of annotations used for code inspection support and code documentation.")
                .author("JetBrains s.r.o.")
                .url("https://github.com/JetBrains/java-annotations");
        }),
        rule("ch.qos.logback", "Logback", License::Apache2, |r| {
            r.description("Logback is a logging framework for Java applications")
                .author("QOS.ch")
                .url("http://logback.qos.ch");
        }),
        rule("io.github.microutils:kotlin-logging", "kotlin-logging", License::Apache2, |r| {
            r.description("Lightweight logging framework for Kotlin")
                .url("https://github.com/MicroUtils/kotlin-logging")
                .author("Ohad Shai");
        }),
        rule("org.slf4j:slf4j-api", "SLF4J", License::Mit, |r| {
            r.description("Simple facade or abstraction for various logging frameworks")
                .url("http://www.slf4j.org")
                .author("QOS.ch");
        }),
        rule("org.slf4j:jcl-over-slf4j", "JCL to SLF4J", License::Mit, |r| {
            r.description("JCL 1.2 implemented over SLF4J")
                .url("http://www.slf4j.org")
                .author("QOS.ch");
        }),
        rule("org.slf4j:jul-to-slf4j", "JUL to SLF4J", License::Mit, |r| {
            r.description("Java Util Logging implemented over SLF4J")
                .url("http://www.slf4j.org")
                .author("QOS.ch");
        }),
        rule("org.slf4j:log4j-over-slf4j", "Log4j to SLF4J", License::Mit, |r| {
            r.description("Log4j implemented over SLF4J")
                .url("http://www.slf4j.org")
                .author("QOS.ch");
        }),
        // JNA moved from LGPL to Apache 2.0 with 4.0
        rule("net.java.dev.jna:jna:1.0", "JNA", License::Lgpl2_1, |r| {
            r.description("Simplified native library access for Java.")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("net.java.dev.jna:jna:4.0", "JNA", License::Apache2, |r| {
            r.description("Simplified native library access for Java.")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("net.java.dev.jna:jna-platform:1.0", "JNA-Platform", License::Lgpl2_1, |r| {
            r.description("Mappings for a number of commonly used platform functions")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("net.java.dev.jna:jna-platform:4.0", "JNA-Platform", License::Apache2, |r| {
            r.description("Mappings for a number of commonly used platform functions")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("net.java.dev.jna:jna-jpms:5.8", "JNA", License::Apache2, |r| {
            r.description("Simplified native library access for Java.")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("net.java.dev.jna:jna-platform-jpms:5.8", "JNA-Platform", License::Apache2, |r| {
            r.description("Mappings for a number of commonly used platform functions")
                .url("https://github.com/twall/jna")
                .author("Timothy Wall");
        }),
        rule("com.hierynomus:sshj", "SSHJ", License::Apache2, |r| {
            r.description("SSHv2 library for Java")
                .url("https://github.com/hierynomus/sshj")
                .author("Jeroen van Erp")
                .author("SSHJ Contributors")
                .extra("Apache MINA", License::Apache2, |e| {
                    e.url("https://mina.apache.org/sshd-project/")
                        .author("The Apache Software Foundation");
                })
                .extra("Apache Commons-Net", License::Apache2, |e| {
                    e.url("https://commons.apache.org/proper/commons-net/")
                        .author("The Apache Software Foundation");
                })
                .extra("JZlib", License::Apache2, |e| {
                    e.url("http://www.jcraft.com/jzlib")
                        .author("Atsuhiko Yamanaka")
                        .author("JCraft, Inc.");
                })
                .extra("Bouncy Castle Crypto", License::Apache2, |e| {
                    e.url("http://www.bouncycastle.org")
                        .author("The Legion of the Bouncy Castle Inc");
                })
                .extra("ed25519-java", License::Cc0, |e| {
                    e.url("https://github.com/str4d/ed25519-java")
                        .author("https://github.com/str4d");
                });
        }),
        rule("org.bouncycastle", "Bouncy Castle Crypto", License::Apache2, |r| {
            r.description("Lightweight cryptography API and JCE Extension")
                .author("The Legion of the Bouncy Castle Inc")
                .url("http://www.bouncycastle.org");
        }),
        rule("com.fasterxml.uuid:java-uuid-generator", "Java Uuid Generator", License::Apache2, |r| {
            r.description("A set of Java classes for working with UUIDs")
                .author("Tatu Saloranta (tatu.saloranta@iki.fi)")
                .author("Contributors. See source release-notes/CREDITS")
                .url("https://github.com/cowtowncoder/java-uuid-generator");
        }),
        rule("org.tukaani:xz", "XZ for Java", License::Cc0, |r| {
            r.description("Complete implementation of XZ data compression in pure Java")
                .author("Lasse Collin")
                .author("Igor Pavlov")
                .url("https://tukaani.org/xz/java.html");
        }),
        rule("io.netty", "Netty", License::Apache2, |r| {
            r.description("An event-driven asynchronous network application framework")
                .author("The Netty Project")
                .author("Contributors. See source NOTICE")
                .url("https://netty.io");
        }),
        rule("org.lwjgl:lwjgl-xxhash", "Lightweight Java Game Library", License::Bsd3, |r| {
            r.description("Java library that enables cross-platform access to popular native APIs")
                .author("Lightweight Java Game Library")
                .url("https://github.com/LWJGL/lwjgl3");
        }),
        rule("org.json:json", "JSON in Java", License::Json, |r| {
            r.description("A light-weight language independent data interchange format.")
                .author("JSON.org")
                .url("https://github.com/stleary/JSON-java")
                .url("https://www.json.org/json-en.html");
        }),
        rule("com.esotericsoftware:kryo", "Kryo", License::Bsd3, |r| {
            r.description("Fast and efficient binary object graph serialization framework for Java")
                .author("Nathan Sweet")
                .url("https://github.com/EsotericSoftware/kryo")
                .extra("ReflectASM", License::Bsd3, |e| {
                    e.url("https://github.com/EsotericSoftware/reflectasm")
                        .author("Nathan Sweet");
                })
                .extra("Objenesis", License::Apache2, |e| {
                    e.url("http://objenesis.org")
                        .author("Objenesis Team and all contributors");
                })
                .extra("MinLog-SLF4J", License::Bsd3, |e| {
                    e.url("https://github.com/EsotericSoftware/minlog")
                        .author("Nathan Sweet");
                });
        }),
        rule("de.javakaffee:kryo-serializers", "Kryo Serializers", License::Apache2, |r| {
            r.description("Extra kryo serializers")
                .url("https://github.com/magro/kryo-serializers")
                .author("Martin Grotzke")
                .author("Rafael Winterhalter");
        }),
        // every os/arch SWT build has its own artifact id
        rule("org.eclipse.platform", "Eclipse Platform", License::Epl, |r| {
            r.description("Frameworks and common services to support the use of Eclipse and it's tools (SWT)")
                .author("The Eclipse Foundation, Inc.")
                .url("https://projects.eclipse.org/projects/eclipse.platform");
        }),
        rule("net.jpountz.lz4:lz4", "LZ4 and XXhash", License::Apache2, |r| {
            r.description("LZ4 compression for Java, based on Yann Collet's work")
                .author("Yann Collet")
                .author("Adrien Grand")
                .url("https://github.com/jpountz/lz4-java")
                .url("http://code.google.com/p/lz4/");
        }),
        rule("com.conversantmedia:disruptor", "Conversant Disruptor", License::Apache2, |r| {
            r.description("Disruptor is the highest performing intra-thread transfer mechanism available in Java.")
                .author("Conversant, Inc")
                .url("https://github.com/conversant/disruptor");
        }),
        rule("io.aeron", "Aeron", License::Apache2, |r| {
            r.description("Efficient reliable UDP unicast, UDP multicast, and IPC message transport")
                .author("Real Logic Limited")
                .url("https://github.com/real-logic/aeron");
        }),
        rule("org.agrona:agrona", "Agrona", License::Apache2, |r| {
            r.description("A Library of data structures and utility methods for high-performance applications")
                .author("Real Logic Limited")
                .url("https://github.com/real-logic/agrona");
        }),
        rule("org.javassist:javassist", "Javassist", License::Apache2, |r| {
            r.description("Javassist (JAVA programming ASSISTant) makes Java bytecode manipulation simple")
                .author("Shigeru Chiba")
                .author("Bill Burke")
                .author("Jason T. Greene")
                .url("http://www.javassist.org")
                .url("https://github.com/jboss-javassist/javassist")
                .note("Licensed under the MPL/LGPL/Apache triple license");
        }),
        rule("net.jodah:typetools", "TypeTools", License::Apache2, |r| {
            r.description("A simple, zero-dependency library for working with types. Supports Java 1.6+ and Android.")
                .author("Jonathan Halterman and friends")
                .url("https://github.com/jhalterman/typetools");
        }),
        rule("com.github.ben-manes.caffeine:caffeine", "Caffeine", License::Apache2, |r| {
            r.description("Caffeine is a high performance, near optimal caching library based on Java 8.")
                .author("Ben Manes")
                .url("https://github.com/ben-manes/caffeine");
        }),
        rule("org.ow2.asm", "ASM", License::Apache2, |r| {
            r.description("ASM: a very small and fast Java bytecode manipulation framework")
                .author("INRIA, France Telecom")
                .url("https://asm.ow2.io/");
        }),
        rule("com.github.jnr", "The Java Native Runtime Project", License::Apache2, |r| {
            r.description("Java Native code interactions for easier JNI usage")
                .author("Wayne Meissner and contributors")
                .url("https://github.com/jnr");
        }),
        rule("net.openhft:chronicle-map", "Chronicle Map", License::Apache2, |r| {
            r.description("Chronicle Map is a super-fast, in-memory, non-blocking, key-value store")
                .author("Chronicle Map Contributors")
                .url("https://github.com/OpenHFT/Chronicle-Map");
        }),
        rule("net.openhft:chronicle-core", "Chronicle Core", License::Apache2, |r| {
            r.description("Library that wraps up low level access")
                .author("Chronicle Software")
                .url("https://github.com/OpenHFT/Chronicle-Core");
        }),
        rule("com.squareup:javapoet", "JavaPoet", License::Apache2, |r| {
            r.description("JavaPoet is a Java API for generating .java source files.")
                .author("Square, Inc.")
                .url("https://github.com/square/javapoet");
        }),
        rule("com.thoughtworks.xstream:xstream", "XStream", License::Bsd3, |r| {
            r.description("XStream is a simple library to serialize objects to XML and back again.")
                .author("Joe Walnes")
                .author("XStream Committers")
                .url("http://x-stream.github.io/");
        }),
        rule("xmlpull:xmlpull", "XML Pull Parsing API", License::Cc0, |r| {
            r.description("XML Pull Parsing API");
        }),
        rule("xpp3:xpp3_min", "MXP1: Xml Pull Parser 3rd Edition (XPP3)", License::Cc0, |r| {
            r.description("XmlPull parsing engine")
                .url("https://mvnrepository.com/artifact/xpp3/xpp3_min");
        }),
        rule("org.apache.maven.resolver", "Apache Maven Artifact Resolver", License::Apache2, |r| {
            r.description("A library for working with artifact repositories and dependency resolution")
                .author("The Apache Software Foundation")
                .url("https://github.com/apache/maven-resolver");
        }),
        rule("org.openjfx", "OpenJFX", License::Gpl2Classpath, |r| {
            r.description("OpenJFX client application platform for desktop, mobile and embedded systems")
                .author("Oracle and/or its affiliates")
                .url("https://github.com/openjdk/jfx");
        }),
        rule("com.squareup.moshi", "Moshi", License::Apache2, |r| {
            r.description("A modern JSON library for Kotlin and Java")
                .author("Square, Inc")
                .url("https://github.com/square/moshi");
        }),
        rule("com.squareup.okio", "OkIO", License::Apache2, |r| {
            r.description("A modern I/O library for Android, Kotlin, and Java")
                .author("Square, Inc")
                .url("https://github.com/square/okio");
        }),
        rule("com.squareup.okhttp3", "OkHttp", License::Apache2, |r| {
            r.description("Square's meticulous HTTP client for the JVM, Android, and GraalVM")
                .author("Square, Inc")
                .url("https://github.com/square/okhttp");
        }),
        rule("net.sf.trove4j", "Trove4J Collections", License::Lgpl2_1, |r| {
            r.description("Fast, lightweight implementations of the Java Collections API")
                .author("Eric D. Friedman")
                .url("http://trove4j.sourceforge.net")
                .extra("HashFunctions", License::Cc0, |e| {
                    e.copyright(1999).author("CERN");
                })
                .extra("PrimeFinder", License::Cc0, |e| {
                    e.copyright(1999).author("CERN");
                });
        }),
    ]
}
