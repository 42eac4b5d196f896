//! Java, Android IDL and BeanShell.

use scilex::KeywordCategory;
use scilex_java::JAVA_LEXER;

use crate::comment::CommentTokens;
use crate::language::Language;

/// Java source files, including `.aidl` interfaces and BeanShell scripts.
pub static JAVA: Language = Language {
    name: "java",
    display_name: "Java Source",
    extensions: &["java", "jav", "jsh", "bsh", "aidl"],
    file_names: &[],
    comments: CommentTokens::line_and_block("//", "/*", "*/"),
    lexer: &JAVA_LEXER,
    keywords: KEYWORDS,
};

const KEYWORDS: &[(KeywordCategory, &str)] = &[
    (
        KeywordCategory::Keyword,
        "abstract assert break case catch class const continue default do else enum exports \
         extends false final finally for goto if implements import instanceof interface module \
         native new null open opens package permits private protected provides public record \
         requires return sealed static strictfp super switch synchronized this throw throws to \
         transient transitive true try uses volatile when while with yield",
    ),
    (
        KeywordCategory::Type,
        "boolean byte char double float int long short var void",
    ),
    // Android IDL
    (
        KeywordCategory::Directive,
        "in inout oneway out parcelable",
    ),
    (
        KeywordCategory::Class,
        "ArrayList Arrays BigDecimal BigInteger Boolean Byte Character Class ClassLoader \
         Collections Double Enum Error Exception File Files Float Formatter HashMap HashSet \
         IllegalArgumentException IllegalStateException IndexOutOfBoundsException Integer \
         LinkedHashMap LinkedList Long Math Matcher MessageFormat NullPointerException Number \
         Object Objects Optional Path Paths Pattern Process Random Record Runtime \
         RuntimeException Scanner Short StackTraceElement String StringBuffer StringBuilder \
         StringJoiner System Thread ThreadLocal Throwable TreeMap \
         UnsupportedOperationException Void",
    ),
    (
        KeywordCategory::Interface,
        "Appendable AutoCloseable BiFunction Callable CharSequence Cloneable Closeable \
         Collection Comparable Comparator Consumer Deque Function Future Iterable Iterator \
         List Map Predicate Queue Readable Runnable Serializable Set SortedMap SortedSet \
         Stream Supplier",
    ),
    (
        KeywordCategory::Enumeration,
        "DayOfWeek ElementType Month RetentionPolicy RoundingMode StandardOpenOption TimeUnit",
    ),
    (
        KeywordCategory::Constant,
        "BYTES MAX_VALUE MIN_VALUE NEGATIVE_INFINITY NaN POSITIVE_INFINITY SIZE TYPE",
    ),
];
