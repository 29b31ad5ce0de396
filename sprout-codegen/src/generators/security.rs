//! Security bundle: JWT-based authentication stack.
//!
//! Emits the user entity and role enum, the token service and request
//! filter, the Spring Security configuration, registration/login service
//! and controller with their transfer objects, and a setup guide.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{
    self, CONFIG_SEGMENT, CONTROLLER_SEGMENT, DTO_SEGMENT, ENTITY_SEGMENT, REPOSITORY_SEGMENT,
    SECURITY_SEGMENT, SERVICE_SEGMENT,
};

pub fn generate(descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
    let base = descriptor.base_namespace().to_string();
    let entity_pkg = naming::sub_package(descriptor, ENTITY_SEGMENT);
    let repo_pkg = naming::sub_package(descriptor, REPOSITORY_SEGMENT);
    let security_pkg = naming::sub_package(descriptor, SECURITY_SEGMENT);
    let config_pkg = naming::sub_package(descriptor, CONFIG_SEGMENT);
    let service_pkg = naming::sub_package(descriptor, SERVICE_SEGMENT);
    let controller_pkg = naming::sub_package(descriptor, CONTROLLER_SEGMENT);
    let dto_pkg = naming::sub_package(descriptor, DTO_SEGMENT);

    vec![
        role(&entity_pkg),
        app_user(&entity_pkg, flags.auditing),
        app_user_repository(&repo_pkg, &entity_pkg),
        jwt_service(&security_pkg),
        jwt_filter(&security_pkg),
        user_details_service(&security_pkg, &repo_pkg),
        security_config(&config_pkg, &security_pkg),
        authentication_service(&service_pkg, &base),
        authentication_controller(&controller_pkg, &base),
        authentication_request(&dto_pkg),
        register_request(&dto_pkg),
        authentication_response(&dto_pkg),
        guide(&base),
    ]
}

fn role(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["User roles for authorization."]).block(
            "public enum Role {",
            |b| b.line("USER,").line("ADMIN,").line("MODERATOR"),
        )
    });
    Artifact::java(pkg, "Role.java", file.render())
}

/// The user entity extends the audit base class only when the auditing
/// bundle is active too, so the generated project always compiles.
fn app_user(pkg: &str, auditing: bool) -> Artifact {
    let extends = if auditing {
        "public class AppUser extends BaseAuditEntity implements UserDetails {"
    } else {
        "public class AppUser implements UserDetails {"
    };

    let file = JavaFile::new(pkg)
        .imports([
            "jakarta.persistence.Column",
            "jakarta.persistence.Entity",
            "jakarta.persistence.EnumType",
            "jakarta.persistence.Enumerated",
            "jakarta.persistence.GeneratedValue",
            "jakarta.persistence.GenerationType",
            "jakarta.persistence.Id",
            "jakarta.persistence.Table",
            "java.util.Collection",
            "java.util.List",
            "org.springframework.security.core.GrantedAuthority",
            "org.springframework.security.core.authority.SimpleGrantedAuthority",
            "org.springframework.security.core.userdetails.UserDetails",
        ])
        .body(|b| {
            b.javadoc(["Account entity backing authentication."])
                .annotation("@Entity")
                .annotation("@Table(name = \"users\")")
                .block(extends, |b| {
                    b.blank()
                        .annotation("@Id")
                        .annotation("@GeneratedValue(strategy = GenerationType.IDENTITY)")
                        .line("private Long id;")
                        .blank()
                        .annotation("@Column(nullable = false, unique = true)")
                        .line("private String username;")
                        .blank()
                        .annotation("@Column(nullable = false, unique = true)")
                        .line("private String email;")
                        .blank()
                        .annotation("@Column(nullable = false)")
                        .line("private String password;")
                        .blank()
                        .annotation("@Enumerated(EnumType.STRING)")
                        .annotation("@Column(nullable = false)")
                        .line("private Role role = Role.USER;")
                        .blank()
                        .annotation("@Column(nullable = false)")
                        .line("private boolean enabled = true;")
                        .blank()
                        .block("public AppUser() {", |b| b)
                        .blank()
                        .block(
                            "public AppUser(String username, String email, String password, Role role) {",
                            |b| {
                                b.line("this.username = username;")
                                    .line("this.email = email;")
                                    .line("this.password = password;")
                                    .line("this.role = role;")
                            },
                        )
                        .blank()
                        .annotation("@Override")
                        .block(
                            "public Collection<? extends GrantedAuthority> getAuthorities() {",
                            |b| {
                                b.line(
                                    "return List.of(new SimpleGrantedAuthority(\"ROLE_\" + role.name()));",
                                )
                            },
                        )
                        .blank()
                        .annotation("@Override")
                        .block("public String getPassword() {", |b| b.line("return password;"))
                        .blank()
                        .annotation("@Override")
                        .block("public String getUsername() {", |b| b.line("return username;"))
                        .blank()
                        .annotation("@Override")
                        .block("public boolean isAccountNonExpired() {", |b| {
                            b.line("return true;")
                        })
                        .blank()
                        .annotation("@Override")
                        .block("public boolean isAccountNonLocked() {", |b| {
                            b.line("return true;")
                        })
                        .blank()
                        .annotation("@Override")
                        .block("public boolean isCredentialsNonExpired() {", |b| {
                            b.line("return true;")
                        })
                        .blank()
                        .annotation("@Override")
                        .block("public boolean isEnabled() {", |b| b.line("return enabled;"))
                        .blank()
                        .block("public Long getId() {", |b| b.line("return id;"))
                        .blank()
                        .block("public String getEmail() {", |b| b.line("return email;"))
                        .blank()
                        .block("public Role getRole() {", |b| b.line("return role;"))
                        .blank()
                        .block("public void setEnabled(boolean enabled) {", |b| {
                            b.line("this.enabled = enabled;")
                        })
                        .blank()
                        .block("public void setRole(Role role) {", |b| {
                            b.line("this.role = role;")
                        })
                        .blank()
                        .block("public void setPassword(String password) {", |b| {
                            b.line("this.password = password;")
                        })
                },
                )
        });
    Artifact::java(pkg, "AppUser.java", file.render())
}

fn app_user_repository(pkg: &str, entity_pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .import(&format!("{entity_pkg}.AppUser"))
        .imports([
            "java.util.Optional",
            "org.springframework.data.jpa.repository.JpaRepository",
            "org.springframework.stereotype.Repository",
        ])
        .body(|b| {
            b.javadoc(["Data access for account entities."])
                .annotation("@Repository")
                .block(
                    "public interface AppUserRepository extends JpaRepository<AppUser, Long> {",
                    |b| {
                        b.blank()
                            .line("Optional<AppUser> findByUsername(String username);")
                            .blank()
                            .line("Optional<AppUser> findByEmail(String email);")
                            .blank()
                            .line("boolean existsByUsername(String username);")
                            .blank()
                            .line("boolean existsByEmail(String email);")
                    },
                )
        });
    Artifact::java(pkg, "AppUserRepository.java", file.render())
}

fn jwt_service(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            "io.jsonwebtoken.Claims",
            "io.jsonwebtoken.Jwts",
            "io.jsonwebtoken.SignatureAlgorithm",
            "io.jsonwebtoken.io.Decoders",
            "io.jsonwebtoken.security.Keys",
            "java.security.Key",
            "java.util.Date",
            "java.util.HashMap",
            "java.util.Map",
            "java.util.function.Function",
            "org.springframework.beans.factory.annotation.Value",
            "org.springframework.security.core.userdetails.UserDetails",
            "org.springframework.stereotype.Service",
        ])
        .body(|b| {
            b.javadoc(["Issues and validates JWT access tokens."])
                .annotation("@Service")
                .block("public class JwtService {", |b| {
                    b.blank()
                        .annotation("@Value(\"${jwt.secret-key}\")")
                        .line("private String secretKey;")
                        .blank()
                        .annotation("@Value(\"${jwt.expiration:86400000}\")")
                        .line("private long jwtExpiration;")
                        .blank()
                        .block("public String extractUsername(String token) {", |b| {
                            b.line("return extractClaim(token, Claims::getSubject);")
                        })
                        .blank()
                        .block(
                            "public <T> T extractClaim(String token, Function<Claims, T> claimsResolver) {",
                            |b| {
                                b.line("final Claims claims = extractAllClaims(token);")
                                    .line("return claimsResolver.apply(claims);")
                            },
                        )
                        .blank()
                        .block("public String generateToken(UserDetails userDetails) {", |b| {
                            b.line("return generateToken(new HashMap<>(), userDetails);")
                        })
                        .blank()
                        .block(
                            "public String generateToken(Map<String, Object> extraClaims, UserDetails userDetails) {",
                            |b| {
                                b.line("return Jwts.builder()")
                                    .indent()
                                    .indent()
                                    .line(".setClaims(extraClaims)")
                                    .line(".setSubject(userDetails.getUsername())")
                                    .line(".setIssuedAt(new Date(System.currentTimeMillis()))")
                                    .line(
                                        ".setExpiration(new Date(System.currentTimeMillis() + jwtExpiration))",
                                    )
                                    .line(".signWith(getSignInKey(), SignatureAlgorithm.HS256)")
                                    .line(".compact();")
                                    .dedent()
                                    .dedent()
                            },
                        )
                        .blank()
                        .block(
                            "public boolean isTokenValid(String token, UserDetails userDetails) {",
                            |b| {
                                b.line("final String username = extractUsername(token);")
                                    .line(
                                        "return username.equals(userDetails.getUsername()) && !isTokenExpired(token);",
                                    )
                            },
                        )
                        .blank()
                        .block("private boolean isTokenExpired(String token) {", |b| {
                            b.line("return extractClaim(token, Claims::getExpiration).before(new Date());")
                        })
                        .blank()
                        .block("private Claims extractAllClaims(String token) {", |b| {
                            b.line("return Jwts.parser()")
                                .indent()
                                .indent()
                                .line(".setSigningKey(getSignInKey())")
                                .line(".build()")
                                .line(".parseClaimsJws(token)")
                                .line(".getBody();")
                                .dedent()
                                .dedent()
                        })
                        .blank()
                        .block("private Key getSignInKey() {", |b| {
                            b.line("byte[] keyBytes = Decoders.BASE64.decode(secretKey);")
                                .line("return Keys.hmacShaKeyFor(keyBytes);")
                        })
                })
        });
    Artifact::java(pkg, "JwtService.java", file.render())
}

fn jwt_filter(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            "jakarta.servlet.FilterChain",
            "jakarta.servlet.ServletException",
            "jakarta.servlet.http.HttpServletRequest",
            "jakarta.servlet.http.HttpServletResponse",
            "java.io.IOException",
            "org.springframework.lang.NonNull",
            "org.springframework.security.authentication.UsernamePasswordAuthenticationToken",
            "org.springframework.security.core.context.SecurityContextHolder",
            "org.springframework.security.core.userdetails.UserDetails",
            "org.springframework.security.core.userdetails.UserDetailsService",
            "org.springframework.security.web.authentication.WebAuthenticationDetailsSource",
            "org.springframework.stereotype.Component",
            "org.springframework.web.filter.OncePerRequestFilter",
        ])
        .body(|b| {
            b.javadoc([
                "Validates the bearer token on each request and populates the",
                "security context.",
            ])
            .annotation("@Component")
            .block(
                "public class JwtAuthenticationFilter extends OncePerRequestFilter {",
                |b| {
                    b.blank()
                        .line("private final JwtService jwtService;")
                        .line("private final UserDetailsService userDetailsService;")
                        .blank()
                        .block(
                            "public JwtAuthenticationFilter(JwtService jwtService, UserDetailsService userDetailsService) {",
                            |b| {
                                b.line("this.jwtService = jwtService;")
                                    .line("this.userDetailsService = userDetailsService;")
                            },
                        )
                        .blank()
                        .annotation("@Override")
                        .block(
                            "protected void doFilterInternal(",
                            |b| {
                                b.line("@NonNull HttpServletRequest request,")
                                    .line("@NonNull HttpServletResponse response,")
                                    .line("@NonNull FilterChain filterChain) throws ServletException, IOException {")
                                    .line("final String authHeader = request.getHeader(\"Authorization\");")
                                    .block(
                                        "if (authHeader == null || !authHeader.startsWith(\"Bearer \")) {",
                                        |b| {
                                            b.line("filterChain.doFilter(request, response);")
                                                .line("return;")
                                        },
                                    )
                                    .line("final String jwt = authHeader.substring(7);")
                                    .line("final String username = jwtService.extractUsername(jwt);")
                                    .block(
                                        "if (username != null && SecurityContextHolder.getContext().getAuthentication() == null) {",
                                        |b| {
                                            b.line(
                                                "UserDetails userDetails = userDetailsService.loadUserByUsername(username);",
                                            )
                                            .block(
                                                "if (jwtService.isTokenValid(jwt, userDetails)) {",
                                                |b| {
                                                    b.line(
                                                        "UsernamePasswordAuthenticationToken authToken = new UsernamePasswordAuthenticationToken(",
                                                    )
                                                    .indent()
                                                    .indent()
                                                    .line("userDetails, null, userDetails.getAuthorities());")
                                                    .dedent()
                                                    .dedent()
                                                    .line(
                                                        "authToken.setDetails(new WebAuthenticationDetailsSource().buildDetails(request));",
                                                    )
                                                    .line(
                                                        "SecurityContextHolder.getContext().setAuthentication(authToken);",
                                                    )
                                                },
                                            )
                                        },
                                    )
                                    .line("filterChain.doFilter(request, response);")
                            },
                        )
                },
            )
        });
    Artifact::java(pkg, "JwtAuthenticationFilter.java", file.render())
}

fn user_details_service(pkg: &str, repo_pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .import(&format!("{repo_pkg}.AppUserRepository"))
        .imports([
            "org.springframework.security.core.userdetails.UserDetails",
            "org.springframework.security.core.userdetails.UserDetailsService",
            "org.springframework.security.core.userdetails.UsernameNotFoundException",
            "org.springframework.stereotype.Service",
        ])
        .body(|b| {
            b.javadoc(["Loads account details for authentication."])
                .annotation("@Service")
                .block(
                    "public class UserDetailsServiceImpl implements UserDetailsService {",
                    |b| {
                        b.blank()
                            .line("private final AppUserRepository repository;")
                            .blank()
                            .block(
                                "public UserDetailsServiceImpl(AppUserRepository repository) {",
                                |b| b.line("this.repository = repository;"),
                            )
                            .blank()
                            .annotation("@Override")
                            .block(
                                "public UserDetails loadUserByUsername(String username) throws UsernameNotFoundException {",
                                |b| {
                                    b.line("return repository.findByUsername(username)")
                                        .indent()
                                        .indent()
                                        .line(
                                            ".orElseThrow(() -> new UsernameNotFoundException(\"User not found with username: \" + username));",
                                        )
                                        .dedent()
                                        .dedent()
                                },
                            )
                    },
                )
        });
    Artifact::java(pkg, "UserDetailsServiceImpl.java", file.render())
}

fn security_config(pkg: &str, security_pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .import(&format!("{security_pkg}.JwtAuthenticationFilter"))
        .imports([
            "org.springframework.context.annotation.Bean",
            "org.springframework.context.annotation.Configuration",
            "org.springframework.security.authentication.AuthenticationManager",
            "org.springframework.security.authentication.AuthenticationProvider",
            "org.springframework.security.authentication.dao.DaoAuthenticationProvider",
            "org.springframework.security.config.annotation.authentication.configuration.AuthenticationConfiguration",
            "org.springframework.security.config.annotation.method.configuration.EnableMethodSecurity",
            "org.springframework.security.config.annotation.web.builders.HttpSecurity",
            "org.springframework.security.config.annotation.web.configuration.EnableWebSecurity",
            "org.springframework.security.config.annotation.web.configurers.AbstractHttpConfigurer",
            "org.springframework.security.config.http.SessionCreationPolicy",
            "org.springframework.security.core.userdetails.UserDetailsService",
            "org.springframework.security.crypto.bcrypt.BCryptPasswordEncoder",
            "org.springframework.security.crypto.password.PasswordEncoder",
            "org.springframework.security.web.SecurityFilterChain",
            "org.springframework.security.web.authentication.UsernamePasswordAuthenticationFilter",
        ])
        .body(|b| {
            b.javadoc([
                "Stateless JWT security configuration.",
                "",
                "Authentication endpoints and the API documentation UI stay",
                "public; everything else requires a valid token.",
            ])
            .annotation("@Configuration")
            .annotation("@EnableWebSecurity")
            .annotation("@EnableMethodSecurity")
            .block("public class SecurityConfig {", |b| {
                b.blank()
                    .line("private final JwtAuthenticationFilter jwtAuthFilter;")
                    .line("private final UserDetailsService userDetailsService;")
                    .blank()
                    .block(
                        "public SecurityConfig(JwtAuthenticationFilter jwtAuthFilter, UserDetailsService userDetailsService) {",
                        |b| {
                            b.line("this.jwtAuthFilter = jwtAuthFilter;")
                                .line("this.userDetailsService = userDetailsService;")
                        },
                    )
                    .blank()
                    .annotation("@Bean")
                    .block(
                        "public SecurityFilterChain securityFilterChain(HttpSecurity http) throws Exception {",
                        |b| {
                            b.line("http")
                                .indent()
                                .line(".csrf(AbstractHttpConfigurer::disable)")
                                .block_with_close(
                                    ".authorizeHttpRequests(auth -> auth",
                                    ")",
                                    |b| {
                                        b.line(".requestMatchers(")
                                            .indent()
                                            .line("\"/api/auth/**\",")
                                            .line("\"/swagger-ui/**\",")
                                            .line("\"/swagger-ui.html\",")
                                            .line("\"/v3/api-docs/**\").permitAll()")
                                            .dedent()
                                            .line(".anyRequest().authenticated()")
                                    },
                                )
                                .line(
                                    ".sessionManagement(session -> session.sessionCreationPolicy(SessionCreationPolicy.STATELESS))",
                                )
                                .line(".authenticationProvider(authenticationProvider())")
                                .line(
                                    ".addFilterBefore(jwtAuthFilter, UsernamePasswordAuthenticationFilter.class);",
                                )
                                .dedent()
                                .line("return http.build();")
                        },
                    )
                    .blank()
                    .annotation("@Bean")
                    .block("public AuthenticationProvider authenticationProvider() {", |b| {
                        b.line("DaoAuthenticationProvider authProvider = new DaoAuthenticationProvider();")
                            .line("authProvider.setUserDetailsService(userDetailsService);")
                            .line("authProvider.setPasswordEncoder(passwordEncoder());")
                            .line("return authProvider;")
                    })
                    .blank()
                    .annotation("@Bean")
                    .block(
                        "public AuthenticationManager authenticationManager(AuthenticationConfiguration config) throws Exception {",
                        |b| b.line("return config.getAuthenticationManager();"),
                    )
                    .blank()
                    .annotation("@Bean")
                    .block("public PasswordEncoder passwordEncoder() {", |b| {
                        b.line("return new BCryptPasswordEncoder();")
                    })
            })
        });
    Artifact::java(pkg, "SecurityConfig.java", file.render())
}

fn authentication_service(pkg: &str, base: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            format!("{base}.dto.AuthenticationRequest").as_str(),
            format!("{base}.dto.AuthenticationResponse").as_str(),
            format!("{base}.dto.RegisterRequest").as_str(),
            format!("{base}.entity.AppUser").as_str(),
            format!("{base}.entity.Role").as_str(),
            format!("{base}.exception.DuplicateResourceException").as_str(),
            format!("{base}.repository.AppUserRepository").as_str(),
            format!("{base}.security.JwtService").as_str(),
        ])
        .imports([
            "org.springframework.security.authentication.AuthenticationManager",
            "org.springframework.security.authentication.UsernamePasswordAuthenticationToken",
            "org.springframework.security.core.userdetails.UsernameNotFoundException",
            "org.springframework.security.crypto.password.PasswordEncoder",
            "org.springframework.stereotype.Service",
            "org.springframework.transaction.annotation.Transactional",
        ])
        .body(|b| {
            b.javadoc(["Registration and login operations."])
                .annotation("@Service")
                .annotation("@Transactional(readOnly = true)")
                .block("public class AuthenticationService {", |b| {
                    b.blank()
                        .line("private final AppUserRepository repository;")
                        .line("private final PasswordEncoder passwordEncoder;")
                        .line("private final JwtService jwtService;")
                        .line("private final AuthenticationManager authenticationManager;")
                        .blank()
                        .block(
                            "public AuthenticationService(",
                            |b| {
                                b.line("AppUserRepository repository,")
                                    .line("PasswordEncoder passwordEncoder,")
                                    .line("JwtService jwtService,")
                                    .line("AuthenticationManager authenticationManager) {")
                                    .line("this.repository = repository;")
                                    .line("this.passwordEncoder = passwordEncoder;")
                                    .line("this.jwtService = jwtService;")
                                    .line("this.authenticationManager = authenticationManager;")
                            },
                        )
                        .blank()
                        .annotation("@Transactional")
                        .block(
                            "public AuthenticationResponse register(RegisterRequest request) {",
                            |b| {
                                b.block(
                                    "if (repository.existsByUsername(request.getUsername())) {",
                                    |b| {
                                        b.line(
                                            "throw new DuplicateResourceException(\"AppUser\", \"username\", request.getUsername());",
                                        )
                                    },
                                )
                                .block(
                                    "if (repository.existsByEmail(request.getEmail())) {",
                                    |b| {
                                        b.line(
                                            "throw new DuplicateResourceException(\"AppUser\", \"email\", request.getEmail());",
                                        )
                                    },
                                )
                                .line("AppUser user = new AppUser(")
                                .indent()
                                .indent()
                                .line("request.getUsername(),")
                                .line("request.getEmail(),")
                                .line("passwordEncoder.encode(request.getPassword()),")
                                .line("Role.USER);")
                                .dedent()
                                .dedent()
                                .line("repository.save(user);")
                                .line("return new AuthenticationResponse(jwtService.generateToken(user));")
                            },
                        )
                        .blank()
                        .block(
                            "public AuthenticationResponse authenticate(AuthenticationRequest request) {",
                            |b| {
                                b.line("authenticationManager.authenticate(")
                                    .indent()
                                    .indent()
                                    .line(
                                        "new UsernamePasswordAuthenticationToken(request.getUsername(), request.getPassword()));",
                                    )
                                    .dedent()
                                    .dedent()
                                    .line("AppUser user = repository.findByUsername(request.getUsername())")
                                    .indent()
                                    .indent()
                                    .line(
                                        ".orElseThrow(() -> new UsernameNotFoundException(\"User not found with username: \" + request.getUsername()));",
                                    )
                                    .dedent()
                                    .dedent()
                                    .line("return new AuthenticationResponse(jwtService.generateToken(user));")
                            },
                        )
                })
        });
    Artifact::java(pkg, "AuthenticationService.java", file.render())
}

fn authentication_controller(pkg: &str, base: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            format!("{base}.dto.AuthenticationRequest").as_str(),
            format!("{base}.dto.AuthenticationResponse").as_str(),
            format!("{base}.dto.RegisterRequest").as_str(),
            format!("{base}.service.AuthenticationService").as_str(),
        ])
        .imports([
            "jakarta.validation.Valid",
            "org.springframework.http.ResponseEntity",
            "org.springframework.web.bind.annotation.PostMapping",
            "org.springframework.web.bind.annotation.RequestBody",
            "org.springframework.web.bind.annotation.RequestMapping",
            "org.springframework.web.bind.annotation.RestController",
        ])
        .body(|b| {
            b.javadoc(["Login and registration endpoints."])
                .annotation("@RestController")
                .annotation("@RequestMapping(\"/api/auth\")")
                .block("public class AuthenticationController {", |b| {
                    b.blank()
                        .line("private final AuthenticationService authenticationService;")
                        .blank()
                        .block(
                            "public AuthenticationController(AuthenticationService authenticationService) {",
                            |b| b.line("this.authenticationService = authenticationService;"),
                        )
                        .blank()
                        .annotation("@PostMapping(\"/register\")")
                        .block(
                            "public ResponseEntity<AuthenticationResponse> register(@Valid @RequestBody RegisterRequest request) {",
                            |b| b.line("return ResponseEntity.ok(authenticationService.register(request));"),
                        )
                        .blank()
                        .annotation("@PostMapping(\"/login\")")
                        .block(
                            "public ResponseEntity<AuthenticationResponse> authenticate(@Valid @RequestBody AuthenticationRequest request) {",
                            |b| {
                                b.line(
                                    "return ResponseEntity.ok(authenticationService.authenticate(request));",
                                )
                            },
                        )
                })
        });
    Artifact::java(pkg, "AuthenticationController.java", file.render())
}

fn authentication_request(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .import("jakarta.validation.constraints.NotBlank")
        .body(|b| {
            b.javadoc(["Login payload."]).block(
                "public class AuthenticationRequest {",
                |b| {
                    b.blank()
                        .annotation("@NotBlank(message = \"Username is required\")")
                        .line("private String username;")
                        .blank()
                        .annotation("@NotBlank(message = \"Password is required\")")
                        .line("private String password;")
                        .blank()
                        .block("public AuthenticationRequest() {", |b| b)
                        .blank()
                        .block(
                            "public AuthenticationRequest(String username, String password) {",
                            |b| {
                                b.line("this.username = username;")
                                    .line("this.password = password;")
                            },
                        )
                        .blank()
                        .block("public String getUsername() {", |b| b.line("return username;"))
                        .blank()
                        .block("public void setUsername(String username) {", |b| {
                            b.line("this.username = username;")
                        })
                        .blank()
                        .block("public String getPassword() {", |b| b.line("return password;"))
                        .blank()
                        .block("public void setPassword(String password) {", |b| {
                            b.line("this.password = password;")
                        })
                },
            )
        });
    Artifact::java(pkg, "AuthenticationRequest.java", file.render())
}

fn register_request(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            "jakarta.validation.constraints.Email",
            "jakarta.validation.constraints.NotBlank",
            "jakarta.validation.constraints.Size",
        ])
        .body(|b| {
            b.javadoc(["Registration payload."]).block(
                "public class RegisterRequest {",
                |b| {
                    b.blank()
                        .annotation("@NotBlank(message = \"Username is required\")")
                        .annotation(
                            "@Size(min = 3, max = 50, message = \"Username must be between 3 and 50 characters\")",
                        )
                        .line("private String username;")
                        .blank()
                        .annotation("@NotBlank(message = \"Email is required\")")
                        .annotation("@Email(message = \"Email must be valid\")")
                        .line("private String email;")
                        .blank()
                        .annotation("@NotBlank(message = \"Password is required\")")
                        .annotation(
                            "@Size(min = 6, message = \"Password must be at least 6 characters\")",
                        )
                        .line("private String password;")
                        .blank()
                        .block("public RegisterRequest() {", |b| b)
                        .blank()
                        .block(
                            "public RegisterRequest(String username, String email, String password) {",
                            |b| {
                                b.line("this.username = username;")
                                    .line("this.email = email;")
                                    .line("this.password = password;")
                            },
                        )
                        .blank()
                        .block("public String getUsername() {", |b| b.line("return username;"))
                        .blank()
                        .block("public void setUsername(String username) {", |b| {
                            b.line("this.username = username;")
                        })
                        .blank()
                        .block("public String getEmail() {", |b| b.line("return email;"))
                        .blank()
                        .block("public void setEmail(String email) {", |b| {
                            b.line("this.email = email;")
                        })
                        .blank()
                        .block("public String getPassword() {", |b| b.line("return password;"))
                        .blank()
                        .block("public void setPassword(String password) {", |b| {
                            b.line("this.password = password;")
                        })
                },
            )
        });
    Artifact::java(pkg, "RegisterRequest.java", file.render())
}

fn authentication_response(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["Token payload returned after login or registration."])
            .block("public class AuthenticationResponse {", |b| {
                b.blank()
                    .line("private String token;")
                    .line("private String type = \"Bearer\";")
                    .blank()
                    .block("public AuthenticationResponse() {", |b| b)
                    .blank()
                    .block("public AuthenticationResponse(String token) {", |b| {
                        b.line("this.token = token;")
                    })
                    .blank()
                    .block("public String getToken() {", |b| b.line("return token;"))
                    .blank()
                    .block("public void setToken(String token) {", |b| {
                        b.line("this.token = token;")
                    })
                    .blank()
                    .block("public String getType() {", |b| b.line("return type;"))
                    .blank()
                    .block("public void setType(String type) {", |b| {
                        b.line("this.type = type;")
                    })
            })
    });
    Artifact::java(pkg, "AuthenticationResponse.java", file.render())
}

fn guide(base: &str) -> Artifact {
    let content = format!(
        "# Security Setup\n\n\
         JWT-based authentication generated under `{base}`.\n\n\
         ## Generated classes\n\n\
         - `entity.AppUser`, `entity.Role` - account entity and role enum\n\
         - `repository.AppUserRepository` - account lookups by username and email\n\
         - `security.JwtService` - token generation and validation\n\
         - `security.JwtAuthenticationFilter` - per-request bearer-token filter\n\
         - `security.UserDetailsServiceImpl` - loads accounts for the auth provider\n\
         - `config.SecurityConfig` - stateless filter chain, BCrypt password encoder\n\
         - `service.AuthenticationService`, `controller.AuthenticationController` - register and login\n\n\
         ## Required configuration\n\n\
         Add a base64-encoded signing key to `application.properties`:\n\n\
         ```properties\n\
         jwt.secret-key=<base64-encoded-256-bit-key>\n\
         jwt.expiration=86400000\n\
         ```\n\n\
         ## Endpoints\n\n\
         - `POST /api/auth/register` - create an account, returns a token\n\
         - `POST /api/auth/login` - authenticate, returns a token\n\n\
         All other `/api/**` endpoints require an `Authorization: Bearer <token>` header.\n\n\
         ## Required dependencies\n\n\
         ```xml\n\
         <dependency>\n\
             <groupId>org.springframework.boot</groupId>\n\
             <artifactId>spring-boot-starter-security</artifactId>\n\
         </dependency>\n\
         <dependency>\n\
             <groupId>io.jsonwebtoken</groupId>\n\
             <artifactId>jjwt-api</artifactId>\n\
             <version>0.11.5</version>\n\
         </dependency>\n\
         <dependency>\n\
             <groupId>io.jsonwebtoken</groupId>\n\
             <artifactId>jjwt-impl</artifactId>\n\
             <version>0.11.5</version>\n\
             <scope>runtime</scope>\n\
         </dependency>\n\
         <dependency>\n\
             <groupId>io.jsonwebtoken</groupId>\n\
             <artifactId>jjwt-jackson</artifactId>\n\
             <version>0.11.5</version>\n\
             <scope>runtime</scope>\n\
         </dependency>\n\
         ```\n"
    );
    Artifact::project_doc("SECURITY_GUIDE.md", content)
}
