pub const MANUAL: &str = r#"GIST(1)                          User Commands                         GIST(1)

NAME
    gist - post text to gist.github.com from the command line

SYNOPSIS
    gist [-p|--no-private] [-t EXTENSION] [FILE]
    gist -r ID
    gist -m | -h | -V

DESCRIPTION
    gist reads FILE, or standard input when no FILE is given, and posts it
    to gist.github.com. The URL of the new gist is opened in your browser,
    copied to the clipboard and printed.

    Run interactively with neither FILE nor piped input, gist prints its
    usage and exits.

OPTIONS
    -p, --private
        Make the gist private.

    --no-private
        Make the gist public even when gist.private is set.

    -t, --type EXTENSION
        Set syntax highlighting of the gist by file extension, e.g. "rb".
        Only used when FILE has no extension of its own. Without either,
        gist.extension applies, then .txt.

    -r, --read ID
        Print the raw content of gist ID and copy it to the clipboard.

    -v, --verbose
        Log what gist is doing to stderr.

    -m, --man
        Print this manual.

    -h, --help
        Print usage.

AUTHENTICATION
    gist posts anonymously unless github.user is set in your global git
    config, in which case github.user and github.token are sent along:

        $ git config --global github.user "your-github-username"
        $ git config --global github.token "your-github-token"

CONFIGURATION
    gist.private
        Create private gists by default. "false", "0", "nil" and the empty
        string are false, anything else is true.

    gist.extension
        Default syntax highlighting extension.

ENVIRONMENT
    HTTP_PROXY
        Proxy used for outbound requests, e.g. http://proxy.local:3128.

    GIST_URL
        Base URL of the gist service. Defaults to https://gist.github.com.

    GIST_LOG
        Log filter, e.g. "debug". Defaults to "warn".

CLIPBOARD
    The first of pbcopy, wl-copy, xclip, xsel, putclip and clip found on
    PATH is used. Without any of them the URL is only printed.

EXAMPLES
    $ gist < file.txt
    $ echo secret | gist --private
    $ echo "puts :hi" | gist -t rb
    $ gist script.py
    $ gist -r 1234 > recovered.txt
"#;
